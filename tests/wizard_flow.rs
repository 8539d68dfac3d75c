//! Wizard Flow Integration Tests
//!
//! Drives the wizard through the public API with the mock services, from
//! research to a reviewed article.

use std::sync::Arc;
use std::time::Duration;

use serial_test::serial;

use copydesk::core::{Config, SeoSettings, Tone, CONFIG_ENV};
use copydesk::handoff::ReviewRequest;
use copydesk::persistence::{InMemoryGateway, PersistenceGateway};
use copydesk::review::{ReviewEntry, ReviewPhase, ReviewSession};
use copydesk::services::Services;
use copydesk::wizard::{titles, EditOutcome, Wizard, WizardError, WizardPhase, WizardSession};

const TOPIC: &str = "Come usare ChatGPT per il marketing locale";

fn session() -> (WizardSession, Arc<InMemoryGateway>) {
    let gateway = Arc::new(InMemoryGateway::new());
    let session = WizardSession::new(Wizard::new(), Services::instant(), gateway.clone());
    (session, gateway)
}

fn with_article() -> WizardSession {
    let (mut session, _) = session();
    tokio_test::block_on(async {
        session.start_research(TOPIC, None).await.unwrap();
        session.generate_article(Tone::Datapizza, SeoSettings::with_keyword("marketing AI")).await.unwrap();
    });
    session
}

// ============================================================================
// Research Step
// ============================================================================

#[test]
fn test_research_scenario() {
    let (mut session, gateway) = session();
    tokio_test::block_on(session.start_research(TOPIC, None)).unwrap();

    let wizard = session.wizard();
    assert_eq!(wizard.phase(), WizardPhase::ResearchReady);
    let research = wizard.research().unwrap();
    assert_eq!(research.key_insights.len(), 5);
    assert_eq!(research.statistics.len(), 4);
    assert!(research.github_data.is_none());
    assert!(wizard.notices().contains_title(titles::RESEARCH_DONE));

    let sessions = tokio_test::block_on(gateway.list_sessions()).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(Some(&sessions[0].id), wizard.session_id());
}

#[test]
fn test_research_with_repository() {
    let (mut session, gateway) = session();
    tokio_test::block_on(session.start_research(TOPIC, Some("openai/openai-python"))).unwrap();

    let github = session.wizard().research().unwrap().github_data.as_ref().unwrap();
    assert_eq!(github.repo, "openai/openai-python");
    assert!(session.wizard().notices().contains_title(titles::GITHUB_DONE));
    assert_eq!(gateway.github_rows().len(), 1);
}

#[test]
fn test_short_topics_never_transition() {
    let (mut session, _) = session();
    for topic in ["", "breve", "   nove car  ", "123456789"] {
        let err = tokio_test::block_on(session.start_research(topic, None)).unwrap_err();
        assert!(matches!(err, WizardError::Validation(_)));
        assert_eq!(session.wizard().phase(), WizardPhase::Idle);
    }
    assert_eq!(session.wizard().notices().len(), 4);
}

#[test]
fn test_malformed_repo_rejected() {
    let (mut session, gateway) = session();
    for repo in ["not a repo", "owner", "owner/", "a/b/c"] {
        assert!(tokio_test::block_on(session.start_research(TOPIC, Some(repo))).is_err());
        assert_eq!(session.wizard().phase(), WizardPhase::Idle);
    }
    assert!(session.wizard().notices().latest().unwrap().is_error());
    assert!(gateway.github_rows().is_empty());
}

// ============================================================================
// Generation Step
// ============================================================================

#[test]
fn test_generation_scenario() {
    let session = with_article();
    let wizard = session.wizard();

    assert_eq!(wizard.phase(), WizardPhase::ArticleReady);
    assert_eq!(wizard.seo().word_count, 1200);
    let article = wizard.article().unwrap();
    assert!(article.starts_with("# "));
    assert!(article.contains("Parole chiave: marketing AI"));
}

#[test]
fn test_blank_keyword_never_transitions() {
    let (mut session, gateway) = session();
    tokio_test::block_on(session.start_research(TOPIC, None)).unwrap();

    let err = tokio_test::block_on(session.generate_article(Tone::Formale, SeoSettings::with_keyword("   ")))
        .unwrap_err();
    assert!(matches!(err, WizardError::Validation(_)));
    assert_eq!(session.wizard().phase(), WizardPhase::ResearchReady);
    assert!(gateway.articles().is_empty());
}

#[test]
fn test_generation_needs_research() {
    let (mut session, _) = session();
    let err = tokio_test::block_on(session.generate_article(Tone::Formale, SeoSettings::with_keyword("AI")))
        .unwrap_err();
    assert_eq!(err, WizardError::NoResearch);
}

// ============================================================================
// Editing & Review
// ============================================================================

#[test]
fn test_toggle_edit_twice_keeps_article() {
    let mut session = with_article();
    let before = session.wizard().article().unwrap().to_string();
    let notices = session.wizard().notices().len();

    let wizard = session.wizard_mut();
    assert_eq!(wizard.toggle_edit().unwrap(), EditOutcome::Started);
    assert_eq!(wizard.toggle_edit().unwrap(), EditOutcome::Unchanged);

    assert_eq!(wizard.article().unwrap(), before);
    assert_eq!(wizard.notices().len(), notices);
    assert!(!wizard.notices().contains_title(titles::EDIT_SAVED));
}

#[test]
fn test_edit_commits_changes() {
    let mut session = with_article();
    let wizard = session.wizard_mut();

    wizard.toggle_edit().unwrap();
    wizard.set_draft("Bozza riscritta");
    assert_eq!(wizard.toggle_edit().unwrap(), EditOutcome::Saved);
    assert_eq!(wizard.article(), Some("Bozza riscritta"));
    assert!(wizard.notices().contains_title(titles::EDIT_SAVED));
}

#[test]
fn test_review_round_trip() {
    let mut session = with_article().with_review_duration(Duration::ZERO);
    let round = tokio_test::block_on(session.review(|draft| draft.push_str("\n\nNota finale."))).unwrap();

    assert!(round.analysis.starts_with("Analisi Tecnica del Contenuto"));
    let wizard = session.wizard();
    assert_eq!(wizard.article(), Some(round.handoff.modified_article.as_str()));
    assert!(wizard.article().unwrap().contains("**AI generativa**"));
    assert!(wizard.article().unwrap().ends_with("Nota finale."));
    assert!(!wizard.is_editing());
    assert_eq!(wizard.phase(), WizardPhase::ArticleReady);
    assert!(wizard.notices().contains_title(titles::REVIEW_APPLIED));
}

#[test]
fn test_review_sends_draft_while_editing() {
    let mut session = with_article();
    let wizard = session.wizard_mut();
    wizard.toggle_edit().unwrap();
    wizard.set_draft("Solo la bozza");

    let request = wizard.request_review().unwrap();
    assert_eq!(request.article_content, "Solo la bozza");
}

#[test]
fn test_review_without_article_redirects() {
    assert!(matches!(ReviewSession::enter(None, Duration::ZERO), ReviewEntry::Redirect));
    assert!(matches!(
        ReviewSession::enter(Some(ReviewRequest::new("")), Duration::ZERO),
        ReviewEntry::Redirect
    ));

    let ReviewEntry::Ready(session) =
        ReviewSession::enter(Some(ReviewRequest::new("Testo")), Duration::ZERO)
    else {
        panic!("article should open the review");
    };
    assert_eq!(session.phase(), ReviewPhase::AwaitingInput);
}

#[test]
fn test_reset_keeps_settings() {
    let mut session = with_article();
    let wizard = session.wizard_mut();
    wizard.set_tone(Tone::Formale);
    wizard.reset();

    assert_eq!(wizard.phase(), WizardPhase::Idle);
    assert!(wizard.research().is_none());
    assert!(wizard.article().is_none());
    assert_eq!(wizard.tone(), Tone::Formale);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
#[serial]
fn test_config_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copydesk.toml");
    std::fs::write(
        &path,
        "[general]\ndefault_tone = \"formale\"\ndefault_word_count = 800\n\n[storage]\nenabled = false\n",
    )
    .unwrap();

    std::env::set_var(CONFIG_ENV, &path);
    let config = Config::load();
    std::env::remove_var(CONFIG_ENV);

    let config = config.unwrap();
    assert_eq!(config.default_tone(), Tone::Formale);
    assert_eq!(config.default_seo().word_count, 800);
    assert!(!config.storage.enabled);
}

#[test]
#[serial]
fn test_config_env_missing_file_fails() {
    std::env::set_var(CONFIG_ENV, "/nonexistent/copydesk/config.toml");
    let config = Config::load();
    std::env::remove_var(CONFIG_ENV);

    assert!(config.is_err());
}

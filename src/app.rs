//! Application state and lifecycle management.
//!
//! This module contains the `App` struct that holds the interactive session:
//! the wizard, the review view when open, the form inputs and the background
//! tasks running the services.
//!
//! Service calls run as tokio tasks on a runtime owned by the app. Their
//! outcomes come back over a channel and are applied on [`App::tick`], so
//! the state machines are only ever touched from the UI thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::core::{
    copy_to_clipboard, send_notification, Config, Notice, ResearchResult, META_DESCRIPTION_MAX,
};
use crate::handoff::{Mailbox, ReviewRequest, ReviewReturn};
use crate::persistence::{open_gateway, PersistenceError, PersistenceGateway, SessionId};
use crate::review::{ReviewEntry, ReviewPhase, ReviewSession};
use crate::services::{ReviewResult, ServiceError, Services};
use crate::tui::Theme;
use crate::wizard::{ArticleSave, ResearchSave, Wizard, WizardPhase};

/// Application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Wizard view (input, research, article)
    #[default]
    Wizard,

    /// El Director review view
    Review,

    /// Showing help screen with keyboard shortcuts
    Help,
}

/// Editable text fields of the wizard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Research topic
    #[default]
    Topic,
    /// Optional GitHub repository
    Repo,
    /// Main SEO keyword
    Keyword,
    /// Secondary keywords
    Secondary,
    /// Meta description
    Meta,
    /// Custom insight entry
    Insight,
}

impl Field {
    /// Fields of the input step.
    pub const INPUT: [Self; 2] = [Self::Topic, Self::Repo];

    /// Fields of the settings step.
    pub const SETTINGS: [Self; 4] = [Self::Keyword, Self::Secondary, Self::Meta, Self::Insight];

    /// Label shown above the field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Topic => "Argomento",
            Self::Repo => "Repo GitHub (opzionale)",
            Self::Keyword => "Parola chiave principale",
            Self::Secondary => "Parole chiave secondarie",
            Self::Meta => "Meta descrizione",
            Self::Insight => "Aggiungi un punto chiave",
        }
    }
}

/// Outcome of a background task, applied on the next tick.
#[derive(Debug)]
pub enum AppEvent {
    /// Research service answered
    Research { ticket: u64, outcome: Result<ResearchResult, ServiceError> },
    /// Research save finished
    ResearchSaved { ticket: u64, outcome: Result<SessionId, PersistenceError> },
    /// Generation service answered
    Article { ticket: u64, outcome: Result<String, ServiceError> },
    /// Article save finished
    ArticleSaved(Result<(), PersistenceError>),
    /// Review service answered
    Review(Result<ReviewResult, ServiceError>),
}

/// Main application state.
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Current UI theme
    pub theme: Theme,

    /// Current mode of the application
    pub mode: AppMode,

    /// Wizard state machine
    pub wizard: Wizard,

    /// Review session, while the review view is open
    pub review: Option<ReviewSession>,

    /// Topic input
    pub topic: String,

    /// Repository input
    pub repo: String,

    /// Custom insight input
    pub insight: String,

    /// Focused form field
    pub focus: Field,

    /// Scroll offset of the article view
    pub article_scroll: u16,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Status message to display (if any)
    pub status_message: Option<String>,

    /// Ticks since start, drives the spinner
    pub tick_count: u64,

    mode_before_help: AppMode,
    to_review: Mailbox<ReviewRequest>,
    to_wizard: Mailbox<ReviewReturn>,
    services: Services,
    gateway: Arc<dyn PersistenceGateway>,
    runtime: Runtime,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
    wizard_task: Option<JoinHandle<()>>,
    review_task: Option<JoinHandle<()>>,
}

impl App {
    /// Create the application with mock services and the configured store.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let services = Services::mock(&config.timing);
        let gateway = open_gateway(&config);
        Self::with_parts(config, services, gateway)
    }

    /// Create the application with explicit collaborators.
    pub fn with_parts(
        config: Config,
        services: Services,
        gateway: Arc<dyn PersistenceGateway>,
    ) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("copydesk-worker")
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = mpsc::channel();

        let theme = Theme::by_name(&config.ui.theme).unwrap_or_default();
        let wizard = Wizard::with_settings(config.default_tone(), config.default_seo());

        tracing::debug!(services = ?services, gateway = gateway.name(), "app created");

        Ok(Self {
            config,
            theme,
            mode: AppMode::default(),
            wizard,
            review: None,
            topic: String::new(),
            repo: String::new(),
            insight: String::new(),
            focus: Field::default(),
            article_scroll: 0,
            should_quit: false,
            status_message: None,
            tick_count: 0,
            mode_before_help: AppMode::default(),
            to_review: Mailbox::new(),
            to_wizard: Mailbox::new(),
            services,
            gateway,
            runtime,
            events_tx,
            events_rx,
            wizard_task: None,
            review_task: None,
        })
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Perform periodic updates (called on tick).
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }

        let ttl = self.config.notice_ttl();
        self.wizard.notices_mut().prune_expired(Instant::now(), ttl);

        if self.mode == AppMode::Wizard {
            if let Some(handoff) = self.to_wizard.take() {
                if self.wizard.receive_review(handoff).is_ok() {
                    self.article_scroll = 0;
                }
            }
        }
    }

    /// Block until one background outcome arrives, then apply it.
    ///
    /// Returns false on timeout.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply_event(event);
                self.tick();
                true
            }
            Err(_) => false,
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Research { ticket, outcome } => {
                if let Ok(save) = self.wizard.complete_research(ticket, outcome) {
                    self.focus = Field::Keyword;
                    self.notify("Ricerca completata", "I risultati della ricerca sono pronti.");
                    self.spawn_research_save(save);
                }
            }
            AppEvent::ResearchSaved { ticket, outcome } => {
                self.wizard.record_research_saved(ticket, outcome);
            }
            AppEvent::Article { ticket, outcome } => {
                if let Ok(save) = self.wizard.complete_generation(ticket, outcome) {
                    self.article_scroll = 0;
                    self.notify("Articolo generato", &self.wizard.seo().main_keyword);
                    if let Some(save) = save {
                        self.spawn_article_save(save);
                    }
                }
            }
            AppEvent::ArticleSaved(outcome) => self.wizard.record_article_saved(outcome),
            AppEvent::Review(outcome) => {
                self.review_task = None;
                match self.review.as_mut() {
                    Some(session) if session.phase() == ReviewPhase::Analyzing => {
                        if session.complete_analysis(outcome).is_ok() {
                            self.notify("Analisi completata", "El Director ha revisionato l'articolo.");
                        }
                    }
                    _ => tracing::debug!("dropping review outcome for a closed view"),
                }
            }
        }
    }

    fn notify(&self, summary: &str, body: &str) {
        if self.config.general.desktop_notifications {
            send_notification(summary, body);
        }
    }

    fn spawn_wizard_task(&mut self, task: JoinHandle<()>) {
        if let Some(previous) = self.wizard_task.replace(task) {
            previous.abort();
        }
    }

    fn spawn_research_save(&self, save: ResearchSave) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let outcome = gateway.save_research(&save.result, save.repo.as_deref()).await;
            let _ = tx.send(AppEvent::ResearchSaved { ticket: save.ticket, outcome });
        });
    }

    fn spawn_article_save(&self, save: ArticleSave) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let outcome =
                gateway.save_article(&save.session_id, &save.content, save.tone, &save.seo).await;
            let _ = tx.send(AppEvent::ArticleSaved(outcome));
        });
    }

    /// Whether a wizard or review service call is in flight.
    pub fn is_loading(&self) -> bool {
        self.wizard.phase().is_loading()
            || self.review.as_ref().is_some_and(|r| r.phase() == ReviewPhase::Analyzing)
    }

    /// Latest notice still on screen for the current view.
    pub fn current_notice(&self, now: Instant) -> Option<&Notice> {
        let ttl = self.config.notice_ttl();
        match (self.mode, &self.review) {
            (AppMode::Review, Some(session)) => session.notices().latest_live(now, ttl),
            _ => self.wizard.notices().latest_live(now, ttl),
        }
    }

    // --- Form input ---

    /// Fields reachable with Tab in the current phase.
    pub fn visible_fields(&self) -> &'static [Field] {
        match self.wizard.phase() {
            WizardPhase::Idle | WizardPhase::Researching => &Field::INPUT,
            WizardPhase::ResearchReady | WizardPhase::Generating => &Field::SETTINGS,
            WizardPhase::ArticleReady => &[],
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus to the previous field.
    pub fn focus_previous(&mut self) {
        let len = self.visible_fields().len();
        self.cycle_focus(len.saturating_sub(1));
    }

    fn cycle_focus(&mut self, step: usize) {
        let fields = self.visible_fields();
        if fields.is_empty() {
            return;
        }
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + step) % fields.len()];
    }

    /// Text of a form field.
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Topic => &self.topic,
            Field::Repo => &self.repo,
            Field::Keyword => &self.wizard.seo().main_keyword,
            Field::Secondary => &self.wizard.seo().secondary_keywords,
            Field::Meta => &self.wizard.seo().meta_description,
            Field::Insight => &self.insight,
        }
    }

    /// Type a character into the focused field.
    pub fn enter_char(&mut self, c: char) {
        match self.focus {
            Field::Topic => self.topic.push(c),
            Field::Repo => self.repo.push(c),
            Field::Keyword => self.wizard.seo_mut().main_keyword.push(c),
            Field::Secondary => self.wizard.seo_mut().secondary_keywords.push(c),
            Field::Meta => {
                let seo = self.wizard.seo_mut();
                if seo.meta_description.chars().count() < META_DESCRIPTION_MAX {
                    let mut text = seo.meta_description.clone();
                    text.push(c);
                    seo.set_meta_description(&text);
                }
            }
            Field::Insight => self.insight.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn delete_char(&mut self) {
        match self.focus {
            Field::Topic => self.topic.pop(),
            Field::Repo => self.repo.pop(),
            Field::Keyword => self.wizard.seo_mut().main_keyword.pop(),
            Field::Secondary => self.wizard.seo_mut().secondary_keywords.pop(),
            Field::Meta => self.wizard.seo_mut().meta_description.pop(),
            Field::Insight => self.insight.pop(),
        };
    }

    /// Clear the focused field.
    pub fn clear_field(&mut self) {
        match self.focus {
            Field::Topic => self.topic.clear(),
            Field::Repo => self.repo.clear(),
            Field::Keyword => self.wizard.seo_mut().main_keyword.clear(),
            Field::Secondary => self.wizard.seo_mut().secondary_keywords.clear(),
            Field::Meta => self.wizard.seo_mut().meta_description.clear(),
            Field::Insight => self.insight.clear(),
        }
    }

    // --- Wizard actions ---

    /// Submit the input form.
    pub fn submit_research(&mut self) {
        let repo = Some(self.repo.trim()).filter(|r| !r.is_empty()).map(str::to_string);
        let Ok(request) = self.wizard.begin_research(&self.topic, repo.as_deref()) else {
            return;
        };

        let service = Arc::clone(&self.services.research);
        let tx = self.events_tx.clone();
        let task = self.runtime.spawn(async move {
            let outcome = service.research(&request.query).await;
            let _ = tx.send(AppEvent::Research { ticket: request.ticket, outcome });
        });
        self.spawn_wizard_task(task);
    }

    /// Generate the article with the current settings.
    pub fn submit_generation(&mut self) {
        let tone = self.wizard.tone();
        let seo = self.wizard.seo().clone();
        let Ok(request) = self.wizard.begin_generation(tone, seo) else {
            return;
        };

        let service = Arc::clone(&self.services.articles);
        let tx = self.events_tx.clone();
        let task = self.runtime.spawn(async move {
            let outcome = service.generate(&request.query).await;
            let _ = tx.send(AppEvent::Article { ticket: request.ticket, outcome });
        });
        self.spawn_wizard_task(task);
    }

    /// Enter on the settings step: add the typed insight, or generate.
    pub fn submit_settings(&mut self) {
        if self.focus == Field::Insight && !self.insight.trim().is_empty() {
            if self.wizard.add_custom_insight(&self.insight) {
                self.insight.clear();
            }
        } else {
            self.submit_generation();
        }
    }

    /// Switch between the two tones.
    pub fn toggle_tone(&mut self) {
        let tone = self.wizard.tone().toggled();
        self.wizard.set_tone(tone);
    }

    /// Lengthen the article target by one step.
    pub fn increase_word_count(&mut self) {
        self.wizard.seo_mut().increase_word_count();
    }

    /// Shorten the article target by one step.
    pub fn decrease_word_count(&mut self) {
        self.wizard.seo_mut().decrease_word_count();
    }

    /// Enter or leave article edit mode.
    pub fn toggle_edit(&mut self) {
        let _ = self.wizard.toggle_edit();
    }

    /// Copy the article to the clipboard.
    pub fn copy_article(&mut self) {
        let command = self.config.export.clipboard_command.clone();
        let _ = self.wizard.copy_article(|text| copy_to_clipboard(text, command.as_deref()));
    }

    /// Write the article to the download directory.
    pub fn download_article(&mut self) {
        let dir = self.config.download_dir();
        if let Ok(path) = self.wizard.download_article(&dir) {
            self.status_message = Some(format!("Salvato in {}", path.display()));
        }
    }

    /// Type into the draft being edited (article or review).
    pub fn edit_draft(&mut self, c: char) {
        let draft = match self.mode {
            AppMode::Review => self.review.as_mut().and_then(ReviewSession::draft_mut),
            _ => self.wizard.draft_mut(),
        };
        if let Some(draft) = draft {
            draft.push(c);
        }
    }

    /// Delete the last character of the draft being edited.
    pub fn delete_draft_char(&mut self) {
        let draft = match self.mode {
            AppMode::Review => self.review.as_mut().and_then(ReviewSession::draft_mut),
            _ => self.wizard.draft_mut(),
        };
        if let Some(draft) = draft {
            draft.pop();
        }
    }

    /// Scroll the article view up.
    pub fn scroll_up(&mut self) {
        self.article_scroll = self.article_scroll.saturating_sub(1);
    }

    /// Scroll the article view down.
    pub fn scroll_down(&mut self) {
        self.article_scroll = self.article_scroll.saturating_add(1);
    }

    /// Drop the session and go back to the input step.
    pub fn reset(&mut self) {
        if let Some(task) = self.wizard_task.take() {
            task.abort();
        }
        self.close_review();
        self.wizard.reset();
        self.topic.clear();
        self.repo.clear();
        self.insight.clear();
        self.focus = Field::Topic;
        self.article_scroll = 0;
        self.status_message = None;
        self.mode = AppMode::Wizard;
    }

    // --- Review view ---

    /// Hand the article to El Director and open the review view.
    pub fn open_review(&mut self) {
        if let Ok(request) = self.wizard.request_review() {
            self.to_review.post(request);
            self.enter_review();
        }
    }

    /// Enter the review view with whatever the wizard posted.
    pub fn enter_review(&mut self) {
        let request = self.to_review.take();
        match ReviewSession::enter(request, self.config.timing.review_duration()) {
            ReviewEntry::Ready(session) => {
                self.review = Some(session);
                self.mode = AppMode::Review;
                self.start_analysis();
            }
            ReviewEntry::Redirect => {
                self.review = None;
                self.mode = AppMode::Wizard;
                self.status_message = Some("Nessun articolo da revisionare".to_string());
            }
        }
    }

    /// Start (or retry) the analysis.
    pub fn start_analysis(&mut self) {
        let Some(session) = self.review.as_mut() else {
            return;
        };
        let Ok(article) = session.begin_analysis(Instant::now()) else {
            return;
        };

        let service = Arc::clone(&self.services.review);
        let tx = self.events_tx.clone();
        let task = self.runtime.spawn(async move {
            let outcome = service.review(&article).await;
            let _ = tx.send(AppEvent::Review(outcome));
        });
        if let Some(previous) = self.review_task.replace(task) {
            previous.abort();
        }
    }

    /// Start editing the revised article.
    pub fn begin_review_edit(&mut self) {
        if let Some(session) = self.review.as_mut() {
            let _ = session.begin_edit();
        }
    }

    /// Send the edited revision back to the wizard.
    pub fn commit_review(&mut self) {
        let Some(session) = self.review.as_mut() else {
            return;
        };
        if let Ok(handoff) = session.commit_edit() {
            self.to_wizard.post(handoff);
            self.close_review();
            self.mode = AppMode::Wizard;
            self.tick();
        }
    }

    /// Leave the review view without sending anything back.
    pub fn leave_review(&mut self) {
        self.close_review();
        self.mode = AppMode::Wizard;
    }

    fn close_review(&mut self) {
        if let Some(task) = self.review_task.take() {
            task.abort();
        }
        if let Some(session) = self.review.take() {
            session.cancel();
        }
    }

    // --- Help ---

    /// Show the help screen.
    pub fn show_help(&mut self) {
        if self.mode != AppMode::Help {
            self.mode_before_help = self.mode;
            self.mode = AppMode::Help;
        }
    }

    /// Dismiss the help screen and return to the previous view.
    pub fn dismiss_help(&mut self) {
        self.mode = self.mode_before_help;
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("phase", &self.wizard.phase())
            .field("review", &self.review.as_ref().map(ReviewSession::phase))
            .field("focus", &self.focus)
            .field("gateway", &self.gateway.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Timing;
    use crate::persistence::InMemoryGateway;

    const WAIT: Duration = Duration::from_secs(5);

    fn app() -> App {
        let mut config = Config::default();
        config.timing = Timing::instant();
        App::with_parts(config, Services::instant(), Arc::new(InMemoryGateway::new())).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| app.enter_char(c));
    }

    fn settle(app: &mut App, done: impl Fn(&App) -> bool) {
        let deadline = Instant::now() + WAIT;
        while !done(app) && Instant::now() < deadline {
            app.wait_for_event(Duration::from_millis(50));
        }
        assert!(done(app), "background task did not finish: {app:?}");
    }

    fn with_article() -> App {
        let mut app = app();
        type_text(&mut app, "Come usare ChatGPT per il marketing locale");
        app.submit_research();
        settle(&mut app, |app| app.wizard.phase() == WizardPhase::ResearchReady);

        type_text(&mut app, "marketing AI");
        app.submit_generation();
        settle(&mut app, |app| app.wizard.phase() == WizardPhase::ArticleReady);
        app
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert_eq!(app.mode, AppMode::Wizard);
        assert_eq!(app.focus, Field::Topic);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_research_runs_in_background() {
        let mut app = app();
        type_text(&mut app, "Come usare ChatGPT per il marketing locale");
        app.submit_research();
        assert_eq!(app.wizard.phase(), WizardPhase::Researching);
        assert!(app.is_loading());

        settle(&mut app, |app| app.wizard.phase() == WizardPhase::ResearchReady);
        assert_eq!(app.focus, Field::Keyword);
    }

    #[test]
    fn test_short_topic_stays_idle() {
        let mut app = app();
        type_text(&mut app, "corto");
        app.submit_research();
        assert_eq!(app.wizard.phase(), WizardPhase::Idle);
        assert!(app.current_notice(Instant::now()).unwrap().is_error());
    }

    #[test]
    fn test_focus_cycles_within_step() {
        let mut app = app();
        app.focus_next();
        assert_eq!(app.focus, Field::Repo);
        app.focus_next();
        assert_eq!(app.focus, Field::Topic);
        app.focus_previous();
        assert_eq!(app.focus, Field::Repo);
    }

    #[test]
    fn test_meta_field_capped() {
        let mut app = app();
        app.focus = Field::Meta;
        type_text(&mut app, &"m".repeat(200));
        assert_eq!(app.field_value(Field::Meta).chars().count(), META_DESCRIPTION_MAX);
    }

    #[test]
    fn test_insight_entry() {
        let mut app = app();
        type_text(&mut app, "Come usare ChatGPT per il marketing locale");
        app.submit_research();
        settle(&mut app, |app| app.wizard.phase() == WizardPhase::ResearchReady);

        app.focus = Field::Insight;
        type_text(&mut app, "Il passaparola digitale conta");
        app.submit_settings();
        assert!(app.insight.is_empty());
        assert_eq!(app.wizard.custom_insights().len(), 1);
        assert_eq!(app.wizard.phase(), WizardPhase::ResearchReady);
    }

    #[test]
    fn test_tick_drops_expired_notices() {
        let mut app = app();
        app.config.ui.notice_ttl_ms = 0;
        type_text(&mut app, "breve");
        app.submit_research();
        assert!(!app.wizard.notices().is_empty());

        app.tick();
        assert!(app.wizard.notices().is_empty());
        assert!(app.current_notice(Instant::now()).is_none());
    }

    #[test]
    fn test_review_round_trip() {
        let mut app = with_article();
        app.open_review();
        assert_eq!(app.mode, AppMode::Review);

        settle(&mut app, |app| {
            app.review.as_ref().is_some_and(|r| r.phase() == ReviewPhase::AnalysisReady)
        });

        app.begin_review_edit();
        app.edit_draft('!');
        app.commit_review();

        assert_eq!(app.mode, AppMode::Wizard);
        assert!(app.review.is_none());
        assert!(app.wizard.article().unwrap().ends_with('!'));
        assert!(!app.wizard.is_editing());
    }

    #[test]
    fn test_leaving_review_discards_pending_analysis() {
        let mut app = with_article();
        app.open_review();
        app.leave_review();
        let before = app.wizard.article().map(str::to_string);

        app.wait_for_event(Duration::from_millis(100));
        app.tick();
        assert!(app.review.is_none());
        assert_eq!(app.wizard.article().map(str::to_string), before);
    }

    #[test]
    fn test_review_without_article_redirects() {
        let mut app = app();
        app.enter_review();
        assert_eq!(app.mode, AppMode::Wizard);
        assert!(app.review.is_none());
    }

    #[test]
    fn test_edit_mode_typing() {
        let mut app = with_article();
        app.toggle_edit();
        app.edit_draft('X');
        app.toggle_edit();
        assert!(app.wizard.article().unwrap().ends_with('X'));
    }

    #[test]
    fn test_reset_clears_inputs() {
        let mut app = with_article();
        app.reset();
        assert_eq!(app.wizard.phase(), WizardPhase::Idle);
        assert!(app.topic.is_empty());
        assert_eq!(app.focus, Field::Topic);
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let mut app = with_article();
        app.open_review();
        app.show_help();
        assert_eq!(app.mode, AppMode::Help);
        app.dismiss_help();
        assert_eq!(app.mode, AppMode::Review);
    }
}

//! Wizard phase controller.
//!
//! The [`Wizard`] owns everything produced during a session: the research
//! result, the article editor, the custom-insight overlay, the form settings
//! and the notices raised along the way.
//!
//! ```text
//! Idle -> Researching -> ResearchReady -> Generating -> ArticleReady
//!   ^          |                              |              |
//!   +--failed--+              ResearchReady <-+-- failed     +-- review hand-off
//! ```
//!
//! Every long-running step is split in two: `begin_*` validates and moves into
//! the loading phase, returning a request carrying a ticket; `complete_*`
//! applies the service outcome for that ticket. Outcomes for a stale ticket
//! are ignored.

mod editor;
mod insights;
mod session;

pub use editor::{ArticleEditor, EditOutcome};
pub use insights::CustomInsights;
pub use session::{ReviewRound, WizardSession};

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::{
    validate_keyword, validate_repo, validate_topic, write_article, Notice, NoticeBoard,
    ResearchResult, SeoSettings, Tone, ValidationError,
};
use crate::handoff::{HandoffSource, ReviewRequest, ReviewReturn};
use crate::persistence::{PersistenceError, SessionId};
use crate::services::{GenerationQuery, ResearchQuery, ServiceError};

/// Notice titles raised by the wizard.
pub mod titles {
    pub const RESEARCH_DONE: &str = "Ricerca completata";
    pub const GITHUB_DONE: &str = "Ricerca GitHub completata";
    pub const RESEARCH_FAILED: &str = "Errore durante la ricerca";
    pub const RESEARCH_SAVED: &str = "Ricerca salvata";
    pub const ARTICLE_DONE: &str = "Articolo generato";
    pub const GENERATION_FAILED: &str = "Errore durante la generazione";
    pub const ARTICLE_SAVED: &str = "Articolo salvato";
    pub const SAVE_FAILED: &str = "Errore";
    pub const EDIT_SAVED: &str = "Modifiche salvate";
    pub const COPIED: &str = "Articolo copiato!";
    pub const COPY_FAILED: &str = "Copia non riuscita";
    pub const DOWNLOADED: &str = "Articolo scaricato";
    pub const DOWNLOAD_FAILED: &str = "Download non riuscito";
    pub const REVIEW_APPLIED: &str = "Revisione applicata";
    pub const INSIGHT_ADDED: &str = "Nota aggiunta";
}

/// Phase of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPhase {
    /// No research yet
    #[default]
    Idle,
    /// Research running
    Researching,
    /// Research shown, no generation started
    ResearchReady,
    /// Article generation running
    Generating,
    /// Article shown and editable
    ArticleReady,
}

impl WizardPhase {
    /// Whether a service call is in flight.
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Researching | Self::Generating)
    }
}

impl fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Researching => "researching",
            Self::ResearchReady => "research ready",
            Self::Generating => "generating",
            Self::ArticleReady => "article ready",
        };
        f.write_str(name)
    }
}

/// Wizard errors. All of them leave the phase unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("another operation is in progress ({0})")]
    Busy(WizardPhase),

    #[error("no research available")]
    NoResearch,

    #[error("no article available")]
    NoArticle,

    #[error("not available while editing")]
    Editing,

    #[error("outcome for a superseded request")]
    Stale,

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("export failed: {0}")]
    Export(String),
}

impl WizardError {
    fn notice(&self) -> Option<Notice> {
        let notice = match self {
            Self::Validation(e) => Notice::error(e.title(), e.description()),
            Self::Busy(_) => Notice::error(
                "Operazione in corso",
                "Attendi il completamento dell'operazione corrente.",
            ),
            Self::NoResearch => Notice::error(
                "Ricerca mancante",
                "Avvia una ricerca prima di generare l'articolo.",
            ),
            Self::NoArticle => {
                Notice::error("Articolo mancante", "Genera un articolo prima di continuare.")
            }
            Self::Editing => Notice::error(
                "Modifica in corso",
                "Salva le modifiche all'articolo prima di continuare.",
            ),
            Self::Stale | Self::Service(_) | Self::Export(_) => return None,
        };
        Some(notice)
    }
}

/// Accepted research submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchRequest {
    /// Ticket to pass back to [`Wizard::complete_research`]
    pub ticket: u64,
    /// What to research
    pub query: ResearchQuery,
}

/// Accepted generation submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Ticket to pass back to [`Wizard::complete_generation`]
    pub ticket: u64,
    /// What to generate
    pub query: GenerationQuery,
}

/// Research result to forward to the persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchSave {
    /// Ticket of the research that produced the result
    pub ticket: u64,
    /// Result to store
    pub result: ResearchResult,
    /// Repository the result was decorated with
    pub repo: Option<String>,
}

/// Generated article to forward to the persistence gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSave {
    /// Research session the article belongs to
    pub session_id: SessionId,
    /// Article text
    pub content: String,
    /// Tone it was generated with
    pub tone: Tone,
    /// SEO settings it was generated with
    pub seo: SeoSettings,
}

/// State of one wizard session.
#[derive(Debug, Default)]
pub struct Wizard {
    phase: WizardPhase,
    research: Option<ResearchResult>,
    session_id: Option<SessionId>,
    editor: ArticleEditor,
    insights: CustomInsights,
    tone: Tone,
    seo: SeoSettings,
    notices: NoticeBoard,
    next_ticket: u64,
    pending: Option<u64>,
    /// Ticket of the research the current session id belongs to
    research_ticket: Option<u64>,
    /// Tone and settings of the generation in flight
    generating_with: Option<(Tone, SeoSettings)>,
}

impl Wizard {
    /// Create a wizard with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wizard with preselected tone and SEO settings.
    pub fn with_settings(tone: Tone, seo: SeoSettings) -> Self {
        Self { tone, seo, ..Self::default() }
    }

    /// Current phase.
    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Research result, once available.
    pub fn research(&self) -> Option<&ResearchResult> {
        self.research.as_ref()
    }

    /// Custom-insight overlay.
    pub fn custom_insights(&self) -> &CustomInsights {
        &self.insights
    }

    /// Researched insights followed by the custom ones.
    pub fn all_insights(&self) -> impl Iterator<Item = &str> {
        self.research
            .iter()
            .flat_map(|r| r.key_insights.iter())
            .chain(self.insights.items().iter())
            .map(String::as_str)
    }

    /// Committed article, if any.
    pub fn article(&self) -> Option<&str> {
        self.editor.committed()
    }

    /// Article editor.
    pub fn editor(&self) -> &ArticleEditor {
        &self.editor
    }

    /// Whether edit mode is on.
    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    /// Selected tone.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Select a tone.
    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    /// SEO settings of the form.
    pub fn seo(&self) -> &SeoSettings {
        &self.seo
    }

    /// Mutable SEO settings of the form.
    pub fn seo_mut(&mut self) -> &mut SeoSettings {
        &mut self.seo
    }

    /// Id of the stored research session, once saved.
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Notices raised so far.
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Mutable notice board (front-ends drain it).
    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    fn reject(&mut self, err: WizardError) -> WizardError {
        tracing::debug!(error = %err, phase = %self.phase, "wizard request rejected");
        if let Some(notice) = err.notice() {
            self.notices.push(notice);
        }
        err
    }

    fn ensure_idle(&mut self) -> Result<(), WizardError> {
        if self.phase.is_loading() {
            return Err(self.reject(WizardError::Busy(self.phase)));
        }
        Ok(())
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        self.next_ticket
    }

    fn take_pending(&mut self, ticket: u64, phase: WizardPhase) -> Result<(), WizardError> {
        if self.phase != phase || self.pending != Some(ticket) {
            tracing::debug!(ticket, phase = %self.phase, "ignoring stale outcome");
            return Err(WizardError::Stale);
        }
        self.pending = None;
        Ok(())
    }

    /// Validate a research submission and move into `Researching`.
    ///
    /// The topic must have at least ten characters once trimmed; a supplied
    /// repository must be an `owner/name` identifier. Prior research and the
    /// article are cleared on acceptance.
    pub fn begin_research(
        &mut self,
        topic: &str,
        repo: Option<&str>,
    ) -> Result<ResearchRequest, WizardError> {
        self.ensure_idle()?;

        let topic = match validate_topic(topic) {
            Ok(topic) => topic.to_string(),
            Err(e) => return Err(self.reject(e.into())),
        };
        let repo = match repo.map(validate_repo).transpose() {
            Ok(repo) => repo.map(str::to_string),
            Err(e) => return Err(self.reject(e.into())),
        };

        self.research = None;
        self.session_id = None;
        self.research_ticket = None;
        self.editor.clear();
        self.phase = WizardPhase::Researching;
        let ticket = self.issue_ticket();

        tracing::info!(ticket, repo = ?repo, "research started");
        Ok(ResearchRequest { ticket, query: ResearchQuery { topic, repo } })
    }

    /// Apply the research service outcome.
    ///
    /// On success the wizard moves to `ResearchReady` and returns the result
    /// to forward to the gateway. On failure it falls back to `Idle`.
    pub fn complete_research(
        &mut self,
        ticket: u64,
        outcome: Result<ResearchResult, ServiceError>,
    ) -> Result<ResearchSave, WizardError> {
        self.take_pending(ticket, WizardPhase::Researching)?;

        match outcome {
            Ok(result) => {
                let repo = result.github_data.as_ref().map(|g| g.repo.clone());
                if let Some(repo) = &repo {
                    self.notices.push(Notice::success(
                        titles::GITHUB_DONE,
                        format!("Analisi della repo {repo} integrata nei risultati."),
                    ));
                }
                self.notices.push(Notice::success(
                    titles::RESEARCH_DONE,
                    "Abbiamo raccolto le informazioni necessarie per il tuo articolo.",
                ));

                self.research = Some(result.clone());
                self.research_ticket = Some(ticket);
                self.phase = WizardPhase::ResearchReady;
                tracing::info!(ticket, "research ready");
                Ok(ResearchSave { ticket, result, repo })
            }
            Err(e) => {
                tracing::warn!(ticket, error = %e, "research failed");
                self.phase = WizardPhase::Idle;
                self.notices.push(Notice::error(
                    titles::RESEARCH_FAILED,
                    "Si è verificato un errore durante la ricerca. Riprova più tardi.",
                ));
                Err(e.into())
            }
        }
    }

    /// Record the outcome of saving research. Never changes the phase.
    pub fn record_research_saved(
        &mut self,
        ticket: u64,
        outcome: Result<SessionId, PersistenceError>,
    ) {
        if self.research_ticket != Some(ticket) {
            tracing::debug!(ticket, "ignoring save outcome for replaced research");
            return;
        }

        match outcome {
            Ok(id) => {
                tracing::info!(session = %id, "research session stored");
                self.session_id = Some(id);
                self.notices.push(Notice::success(
                    titles::RESEARCH_SAVED,
                    "I dati della ricerca sono stati salvati con successo",
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "error saving research data");
                self.notices.push(Notice::error(
                    titles::SAVE_FAILED,
                    "Si è verificato un errore durante il salvataggio dei dati",
                ));
            }
        }
    }

    /// Validate a generation submission and move into `Generating`.
    ///
    /// The tone and settings are kept as the form state even when rejected.
    pub fn begin_generation(
        &mut self,
        tone: Tone,
        seo: SeoSettings,
    ) -> Result<GenerationRequest, WizardError> {
        self.tone = tone;
        self.seo = seo;
        self.ensure_idle()?;

        if let Err(e) = validate_keyword(&self.seo.main_keyword) {
            return Err(self.reject(e.into()));
        }
        let Some(research) = self.research.clone() else {
            return Err(self.reject(WizardError::NoResearch));
        };

        self.phase = WizardPhase::Generating;
        let ticket = self.issue_ticket();
        self.generating_with = Some((self.tone, self.seo.clone()));

        tracing::info!(ticket, tone = %self.tone, keyword = %self.seo.main_keyword, "generation started");
        Ok(GenerationRequest {
            ticket,
            query: GenerationQuery { research, tone: self.tone, seo: self.seo.clone() },
        })
    }

    /// Apply the generation service outcome.
    ///
    /// On success the wizard moves to `ArticleReady`; the returned save is
    /// `None` when the research was never stored. On failure it goes back to
    /// the phase it came from.
    pub fn complete_generation(
        &mut self,
        ticket: u64,
        outcome: Result<String, ServiceError>,
    ) -> Result<Option<ArticleSave>, WizardError> {
        self.take_pending(ticket, WizardPhase::Generating)?;
        let (tone, seo) =
            self.generating_with.take().unwrap_or_else(|| (self.tone, self.seo.clone()));

        match outcome {
            Ok(article) => {
                self.editor.replace(article.clone());
                self.phase = WizardPhase::ArticleReady;
                self.notices.push(Notice::success(
                    titles::ARTICLE_DONE,
                    "Il tuo articolo SEO è stato generato con successo.",
                ));
                tracing::info!(ticket, chars = article.len(), "article ready");

                Ok(self.session_id.clone().map(|session_id| ArticleSave {
                    session_id,
                    content: article,
                    tone,
                    seo,
                }))
            }
            Err(e) => {
                tracing::warn!(ticket, error = %e, "generation failed");
                self.phase = if self.editor.committed().is_some() {
                    WizardPhase::ArticleReady
                } else {
                    WizardPhase::ResearchReady
                };
                self.notices.push(Notice::error(
                    titles::GENERATION_FAILED,
                    "Si è verificato un errore durante la generazione dell'articolo. Riprova più tardi.",
                ));
                Err(e.into())
            }
        }
    }

    /// Record the outcome of saving an article. Never changes the phase.
    pub fn record_article_saved(&mut self, outcome: Result<(), PersistenceError>) {
        match outcome {
            Ok(()) => self.notices.push(Notice::success(
                titles::ARTICLE_SAVED,
                "L'articolo generato è stato salvato con successo",
            )),
            Err(e) => {
                tracing::warn!(error = %e, "error saving generated article");
                self.notices.push(Notice::error(
                    titles::SAVE_FAILED,
                    "Si è verificato un errore durante il salvataggio dell'articolo",
                ));
            }
        }
    }

    fn ensure_article(&mut self) -> Result<(), WizardError> {
        if self.phase != WizardPhase::ArticleReady || self.editor.committed().is_none() {
            return Err(self.reject(WizardError::NoArticle));
        }
        Ok(())
    }

    /// Flip edit mode.
    ///
    /// Leaving edit mode commits a changed draft and raises a "saved" notice;
    /// an unchanged draft raises nothing.
    pub fn toggle_edit(&mut self) -> Result<EditOutcome, WizardError> {
        self.ensure_article()?;
        let outcome = self.editor.toggle();
        if outcome == EditOutcome::Saved {
            self.notices.push(Notice::success(
                titles::EDIT_SAVED,
                "Le modifiche all'articolo sono state salvate con successo.",
            ));
        }
        Ok(outcome)
    }

    /// Replace the draft. Ignored outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.editor.set_draft(text);
    }

    /// Mutable draft, while editing.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        self.editor.draft_mut()
    }

    fn committed_for_export(&mut self) -> Result<String, WizardError> {
        self.ensure_article()?;
        if self.editor.is_editing() {
            return Err(self.reject(WizardError::Editing));
        }
        self.editor.committed().map(str::to_string).ok_or(WizardError::NoArticle)
    }

    /// Copy the committed article through `sink` (usually the clipboard).
    pub fn copy_article<F>(&mut self, sink: F) -> Result<(), WizardError>
    where
        F: FnOnce(&str) -> anyhow::Result<()>,
    {
        let article = self.committed_for_export()?;
        match sink(&article) {
            Ok(()) => {
                self.notices.push(Notice::success(
                    titles::COPIED,
                    "L'articolo è stato copiato negli appunti.",
                ));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.notices.push(Notice::error(titles::COPY_FAILED, e.to_string()));
                Err(WizardError::Export(e.to_string()))
            }
        }
    }

    /// Write the committed article to `dir` as `articolo-<keyword>.txt`.
    pub fn download_article(&mut self, dir: &Path) -> Result<PathBuf, WizardError> {
        let article = self.committed_for_export()?;
        match write_article(dir, &self.seo.main_keyword, &article) {
            Ok(path) => {
                self.notices.push(Notice::success(
                    titles::DOWNLOADED,
                    format!("Salvato in {}", path.display()),
                ));
                Ok(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "download failed");
                self.notices.push(Notice::error(titles::DOWNLOAD_FAILED, e.to_string()));
                Err(WizardError::Export(e.to_string()))
            }
        }
    }

    /// Package the visible article (draft while editing) for the review flow.
    pub fn request_review(&mut self) -> Result<ReviewRequest, WizardError> {
        self.ensure_article()?;
        let article = self.editor.visible().unwrap_or_default().to_string();
        tracing::info!(editing = self.editor.is_editing(), "review requested");
        Ok(ReviewRequest::new(article))
    }

    /// Apply an article handed back by the review flow.
    ///
    /// The returned text becomes the committed article and the draft, edit
    /// mode is left and the wizard shows the article.
    pub fn receive_review(&mut self, handoff: ReviewReturn) -> Result<(), WizardError> {
        self.ensure_idle()?;
        match handoff.source {
            HandoffSource::Review => {
                self.editor.replace(handoff.modified_article);
                self.phase = WizardPhase::ArticleReady;
                self.notices.push(Notice::success(
                    titles::REVIEW_APPLIED,
                    "Le modifiche di El Director sono state riportate nell'articolo.",
                ));
                tracing::info!("review hand-off applied");
            }
        }
        Ok(())
    }

    /// Append a custom insight. Returns whether anything was added.
    pub fn add_custom_insight(&mut self, text: &str) -> bool {
        let added = self.insights.add(text);
        if added {
            self.notices.push(Notice::success(
                titles::INSIGHT_ADDED,
                "Il punto chiave è stato aggiunto con successo.",
            ));
        }
        added
    }

    /// Drop the whole session, back to `Idle`.
    pub fn reset(&mut self) {
        let (tone, seo) = (self.tone, self.seo.clone());
        let next_ticket = self.next_ticket;
        *self = Self::with_settings(tone, seo);
        self.next_ticket = next_ticket;
        tracing::info!("wizard reset");
    }
}

//! Technical review flow ("El Director").
//!
//! A review session is entered with a one-shot [`ReviewRequest`]. It runs a
//! fixed-duration analysis, rotating through five status lines at even
//! intervals, then lets the user edit the revised article and hand it back to
//! the wizard as a [`ReviewReturn`].
//!
//! ```text
//! AwaitingInput -> Analyzing -> AnalysisReady -> Editing -> Completed
//! ```

mod revision;

pub use revision::{revise_article, REVISIONS};

use std::fmt;
use std::time::{Duration, Instant};

use crate::core::{Notice, NoticeBoard};
use crate::handoff::{ReviewRequest, ReviewReturn};
use crate::services::{fixtures::REVIEW_STATUS_MESSAGES, ReviewResult, ReviewService, ServiceError};

/// Phase of a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPhase {
    /// Article received, analysis not started
    AwaitingInput,
    /// Analysis running
    Analyzing,
    /// Analysis shown
    AnalysisReady,
    /// User editing the revised article
    Editing,
    /// Revised article handed back
    Completed,
}

impl fmt::Display for ReviewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingInput => "awaiting input",
            Self::Analyzing => "analyzing",
            Self::AnalysisReady => "analysis ready",
            Self::Editing => "editing",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Review flow errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("operation not allowed while {actual} (requires {expected})")]
    WrongPhase { expected: ReviewPhase, actual: ReviewPhase },

    #[error("analysis failed: {0}")]
    Service(#[from] ServiceError),
}

/// Result of entering the review view.
#[derive(Debug)]
pub enum ReviewEntry {
    /// Article present; session ready to analyse
    Ready(ReviewSession),
    /// No article supplied; go back to the wizard's initial view
    Redirect,
}

/// Status line for a point of the analysis.
///
/// The duration is split into five equal slots; the last line stays up once
/// the duration has elapsed.
pub fn status_message_at(elapsed: Duration, duration: Duration) -> &'static str {
    let count = REVIEW_STATUS_MESSAGES.len();
    let index = if duration.is_zero() {
        count - 1
    } else {
        let slot = elapsed.as_millis() * count as u128 / duration.as_millis().max(1);
        (slot as usize).min(count - 1)
    };
    REVIEW_STATUS_MESSAGES[index]
}

/// State of one review session.
#[derive(Debug)]
pub struct ReviewSession {
    phase: ReviewPhase,
    article: String,
    duration: Duration,
    started_at: Option<Instant>,
    result: Option<ReviewResult>,
    draft: String,
    notices: NoticeBoard,
}

impl ReviewSession {
    /// Enter the review view with the payload posted by the wizard.
    ///
    /// A missing payload or an empty article redirects.
    pub fn enter(request: Option<ReviewRequest>, duration: Duration) -> ReviewEntry {
        match request {
            Some(request) if !request.article_content.is_empty() => {
                ReviewEntry::Ready(Self {
                    phase: ReviewPhase::AwaitingInput,
                    article: request.article_content,
                    duration,
                    started_at: None,
                    result: None,
                    draft: String::new(),
                    notices: NoticeBoard::new(),
                })
            }
            _ => {
                tracing::info!("review entered without an article, redirecting");
                ReviewEntry::Redirect
            }
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ReviewPhase {
        self.phase
    }

    /// Article under review.
    pub fn article(&self) -> &str {
        &self.article
    }

    /// Configured analysis duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Notices raised by this session.
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    fn expect_phase(&self, expected: ReviewPhase) -> Result<(), ReviewError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ReviewError::WrongPhase { expected, actual: self.phase })
        }
    }

    /// Start the analysis. Returns the article to hand to the reviewer.
    pub fn begin_analysis(&mut self, now: Instant) -> Result<String, ReviewError> {
        self.expect_phase(ReviewPhase::AwaitingInput)?;
        self.phase = ReviewPhase::Analyzing;
        self.started_at = Some(now);
        tracing::info!(chars = self.article.len(), "review analysis started");
        Ok(self.article.clone())
    }

    /// Status line to show at `now` while analysing.
    pub fn status_message(&self, now: Instant) -> Option<&'static str> {
        if self.phase != ReviewPhase::Analyzing {
            return None;
        }
        let started = self.started_at?;
        Some(status_message_at(now.saturating_duration_since(started), self.duration))
    }

    /// Fraction of the analysis duration elapsed at `now`, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        match (self.phase, self.started_at) {
            (ReviewPhase::Analyzing, Some(started)) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(started).as_secs_f64();
                (elapsed / self.duration.as_secs_f64()).min(1.0)
            }
            (ReviewPhase::AwaitingInput, _) => 0.0,
            _ => 1.0,
        }
    }

    /// Apply the reviewer's outcome.
    ///
    /// A failed analysis returns the session to `AwaitingInput` so it can be
    /// retried.
    pub fn complete_analysis(
        &mut self,
        outcome: Result<ReviewResult, ServiceError>,
    ) -> Result<(), ReviewError> {
        self.expect_phase(ReviewPhase::Analyzing)?;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.phase = ReviewPhase::AnalysisReady;
                tracing::info!("review analysis ready");
                Ok(())
            }
            Err(e) => {
                self.phase = ReviewPhase::AwaitingInput;
                self.started_at = None;
                tracing::warn!(error = %e, "review analysis failed");
                self.notices.push(Notice::error(
                    "Analisi non riuscita",
                    "Non è stato possibile completare l'analisi tecnica. Riprova più tardi.",
                ));
                Err(e.into())
            }
        }
    }

    /// Analysis text, once ready.
    pub fn analysis(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.analysis_text.as_str())
    }

    /// Revised article proposed by the reviewer, once ready.
    pub fn revised_article(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.revised_article.as_str())
    }

    /// Start editing the revised article.
    pub fn begin_edit(&mut self) -> Result<(), ReviewError> {
        self.expect_phase(ReviewPhase::AnalysisReady)?;
        self.draft = self.revised_article().unwrap_or(&self.article).to_string();
        self.phase = ReviewPhase::Editing;
        Ok(())
    }

    /// Draft being edited.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft. Ignored outside editing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.phase == ReviewPhase::Editing {
            self.draft = text.into();
        }
    }

    /// Mutable draft, while editing.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        (self.phase == ReviewPhase::Editing).then_some(&mut self.draft)
    }

    /// Hand the draft back to the wizard.
    pub fn commit_edit(&mut self) -> Result<ReviewReturn, ReviewError> {
        self.expect_phase(ReviewPhase::Editing)?;
        self.phase = ReviewPhase::Completed;
        self.notices.push(Notice::success(
            "Modifiche inviate",
            "L'articolo revisionato è stato riportato nell'editor.",
        ));
        tracing::info!(chars = self.draft.len(), "review committed");
        Ok(ReviewReturn::from_review(self.draft.clone()))
    }

    /// Leave the review view. Any outcome still in flight must be discarded
    /// by the caller.
    pub fn cancel(self) {
        tracing::info!(phase = %self.phase, "review cancelled");
    }

    /// Run the whole analysis against `service`.
    pub async fn run_analysis(&mut self, service: &dyn ReviewService) -> Result<(), ReviewError> {
        let article = self.begin_analysis(Instant::now())?;
        let outcome = service.review(&article).await;
        self.complete_analysis(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockReviewService;

    fn ready(article: &str) -> ReviewSession {
        match ReviewSession::enter(Some(ReviewRequest::new(article)), Duration::from_secs(10)) {
            ReviewEntry::Ready(session) => session,
            ReviewEntry::Redirect => panic!("expected a session"),
        }
    }

    #[test]
    fn test_missing_article_redirects() {
        assert!(matches!(ReviewSession::enter(None, Duration::ZERO), ReviewEntry::Redirect));
        assert!(matches!(
            ReviewSession::enter(Some(ReviewRequest::new("")), Duration::ZERO),
            ReviewEntry::Redirect
        ));
    }

    #[test]
    fn test_status_messages_rotate_evenly() {
        let duration = Duration::from_secs(10);
        let at = |secs: u64| status_message_at(Duration::from_secs(secs), duration);

        assert_eq!(at(0), REVIEW_STATUS_MESSAGES[0]);
        assert_eq!(at(1), REVIEW_STATUS_MESSAGES[0]);
        assert_eq!(at(2), REVIEW_STATUS_MESSAGES[1]);
        assert_eq!(at(5), REVIEW_STATUS_MESSAGES[2]);
        assert_eq!(at(8), REVIEW_STATUS_MESSAGES[4]);
        assert_eq!(at(30), REVIEW_STATUS_MESSAGES[4]);
        assert_eq!(status_message_at(Duration::ZERO, Duration::ZERO), REVIEW_STATUS_MESSAGES[4]);
    }

    #[test]
    fn test_session_status_only_while_analyzing() {
        let mut session = ready("AI generativa");
        let start = Instant::now();
        assert!(session.status_message(start).is_none());
        assert_eq!(session.progress(start), 0.0);

        session.begin_analysis(start).unwrap();
        assert_eq!(session.status_message(start), Some(REVIEW_STATUS_MESSAGES[0]));
        assert_eq!(
            session.status_message(start + Duration::from_secs(4)),
            Some(REVIEW_STATUS_MESSAGES[2])
        );
        assert!((session.progress(start + Duration::from_secs(5)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_full_flow() {
        let mut session = ready("Testo con AI generativa.");
        session.begin_analysis(Instant::now()).unwrap();
        session
            .complete_analysis(Ok(ReviewResult {
                analysis_text: "ok".to_string(),
                revised_article: revise_article("Testo con AI generativa."),
            }))
            .unwrap();
        assert_eq!(session.phase(), ReviewPhase::AnalysisReady);
        assert_eq!(session.analysis(), Some("ok"));

        session.begin_edit().unwrap();
        assert!(session.draft().contains("**AI generativa**"));

        session.draft_mut().unwrap().push_str("\nNota finale.");
        let handoff = session.commit_edit().unwrap();
        assert!(handoff.modified_article.ends_with("Nota finale."));
        assert_eq!(session.phase(), ReviewPhase::Completed);
    }

    #[test]
    fn test_wrong_phase_rejected() {
        let mut session = ready("testo");
        assert!(matches!(session.begin_edit(), Err(ReviewError::WrongPhase { .. })));
        assert!(session.commit_edit().is_err());
        session.set_draft("ignored");
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn test_failed_analysis_can_retry() {
        let mut session = ready("testo");
        session.begin_analysis(Instant::now()).unwrap();
        let err = session.complete_analysis(Err(ServiceError::Unavailable("x".into())));
        assert!(matches!(err, Err(ReviewError::Service(_))));
        assert_eq!(session.phase(), ReviewPhase::AwaitingInput);
        assert!(session.notices().latest().unwrap().is_error());
        assert!(session.begin_analysis(Instant::now()).is_ok());
    }

    #[test]
    fn test_cancel_while_analyzing() {
        let mut session = ready("testo");
        session.begin_analysis(Instant::now()).unwrap();
        assert_eq!(session.phase(), ReviewPhase::Analyzing);
        session.cancel();
    }

    #[tokio::test]
    async fn test_run_analysis_with_mock() {
        let mut session = ready("Il prompt engineering conta.");
        session.run_analysis(&MockReviewService::default()).await.unwrap();
        assert_eq!(session.phase(), ReviewPhase::AnalysisReady);
        assert!(session.revised_article().unwrap().contains("**prompt engineering**"));
    }
}

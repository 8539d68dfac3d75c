//! Async driver running a [`Wizard`] against services and a gateway.
//!
//! Used by the non-interactive CLI paths and the integration tests. Each call
//! awaits the service inline, then forwards the result to the gateway. Save
//! failures only raise notices.

use std::sync::Arc;
use std::time::Duration;

use super::{Wizard, WizardError, WizardPhase};
use crate::core::{SeoSettings, Tone};
use crate::handoff::ReviewReturn;
use crate::persistence::PersistenceGateway;
use crate::review::{ReviewEntry, ReviewSession};
use crate::services::Services;

/// Outcome of a completed review round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRound {
    /// Analysis text shown by the reviewer
    pub analysis: String,
    /// Article handed back to the wizard
    pub handoff: ReviewReturn,
}

/// A wizard wired to its collaborators.
pub struct WizardSession {
    wizard: Wizard,
    services: Services,
    gateway: Arc<dyn PersistenceGateway>,
    review_duration: Duration,
}

impl WizardSession {
    /// Create a session.
    pub fn new(wizard: Wizard, services: Services, gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { wizard, services, gateway, review_duration: Duration::ZERO }
    }

    /// Set the analysis duration used for review status lines.
    pub fn with_review_duration(mut self, duration: Duration) -> Self {
        self.review_duration = duration;
        self
    }

    /// The wrapped wizard.
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Mutable access to the wrapped wizard.
    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// Consume the session, keeping the wizard.
    pub fn into_wizard(self) -> Wizard {
        self.wizard
    }

    /// Research `topic`, optionally decorated with a GitHub repository.
    pub async fn start_research(
        &mut self,
        topic: &str,
        repo: Option<&str>,
    ) -> Result<(), WizardError> {
        let request = self.wizard.begin_research(topic, repo)?;
        let outcome = self.services.research.research(&request.query).await;
        let save = self.wizard.complete_research(request.ticket, outcome)?;

        let stored = self.gateway.save_research(&save.result, save.repo.as_deref()).await;
        self.wizard.record_research_saved(save.ticket, stored);
        Ok(())
    }

    /// Generate the article with `tone` and `seo`.
    pub async fn generate_article(&mut self, tone: Tone, seo: SeoSettings) -> Result<(), WizardError> {
        let request = self.wizard.begin_generation(tone, seo)?;
        let outcome = self.services.articles.generate(&request.query).await;

        match self.wizard.complete_generation(request.ticket, outcome)? {
            Some(save) => {
                let stored = self
                    .gateway
                    .save_article(&save.session_id, &save.content, save.tone, &save.seo)
                    .await;
                self.wizard.record_article_saved(stored);
            }
            None => tracing::debug!("no research session stored, article not saved"),
        }
        Ok(())
    }

    /// Send the article through a full review round.
    ///
    /// `edit` gets the revised article before it is handed back, as the user
    /// would in the review editor.
    pub async fn review<F>(&mut self, edit: F) -> Result<ReviewRound, anyhow::Error>
    where
        F: FnOnce(&mut String),
    {
        let request = self.wizard.request_review()?;
        let entry = ReviewSession::enter(Some(request), self.review_duration);
        let ReviewEntry::Ready(mut session) = entry else {
            anyhow::bail!("article is empty, nothing to review");
        };

        session.run_analysis(self.services.review.as_ref()).await?;
        let analysis = session.analysis().unwrap_or_default().to_string();

        session.begin_edit()?;
        if let Some(draft) = session.draft_mut() {
            edit(draft);
        }
        let handoff = session.commit_edit()?;

        self.wizard.receive_review(handoff.clone())?;
        debug_assert_eq!(self.wizard.phase(), WizardPhase::ArticleReady);
        Ok(ReviewRound { analysis, handoff })
    }
}

impl std::fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardSession")
            .field("wizard", &self.wizard)
            .field("services", &self.services)
            .field("gateway", &self.gateway.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryGateway;
    use crate::wizard::titles;

    fn session(gateway: Arc<InMemoryGateway>) -> WizardSession {
        WizardSession::new(Wizard::new(), Services::instant(), gateway)
    }

    #[tokio::test]
    async fn test_research_then_generate_saves_both() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut session = session(gateway.clone());

        session.start_research("Marketing locale con l'AI", Some("openai/openai-python")).await.unwrap();
        assert!(session.wizard().session_id().is_some());
        assert_eq!(gateway.github_rows().len(), 1);

        session.generate_article(Tone::Formale, SeoSettings::with_keyword("ChatGPT")).await.unwrap();
        assert_eq!(session.wizard().phase(), WizardPhase::ArticleReady);

        let articles = gateway.articles();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].tone, Tone::Formale);
        assert!(session.wizard().notices().contains_title(titles::ARTICLE_SAVED));
    }

    #[tokio::test]
    async fn test_save_failure_does_not_roll_back() {
        let gateway = Arc::new(InMemoryGateway::new());
        gateway.set_failure(Some("offline"));
        let mut session = session(gateway.clone());

        session.start_research("Marketing locale con l'AI", None).await.unwrap();
        assert_eq!(session.wizard().phase(), WizardPhase::ResearchReady);
        assert!(session.wizard().session_id().is_none());

        session.generate_article(Tone::Datapizza, SeoSettings::with_keyword("seo")).await.unwrap();
        assert_eq!(session.wizard().phase(), WizardPhase::ArticleReady);
        assert!(gateway.articles().is_empty());
    }

    #[tokio::test]
    async fn test_review_round_trip() {
        let mut session = session(Arc::new(InMemoryGateway::new()));
        session.start_research("Marketing locale con l'AI", None).await.unwrap();
        session.generate_article(Tone::Datapizza, SeoSettings::with_keyword("seo")).await.unwrap();

        let round = session.review(|draft| draft.push_str("\n\nFirmato, la redazione.")).await.unwrap();
        assert!(!round.analysis.is_empty());

        let article = session.wizard().article().unwrap();
        assert!(article.ends_with("Firmato, la redazione."));
        assert!(!session.wizard().is_editing());
    }
}

//! In-memory gateway, used when storage is disabled and in tests.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{
    GeneratedArticleRecord, GithubResearchRecord, PersistenceError, PersistenceGateway,
    ResearchSessionRecord, SessionId,
};
use crate::core::{ResearchResult, SeoSettings, Tone};

/// The three tables held by a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Tables {
    #[serde(default)]
    pub research_sessions: Vec<ResearchSessionRecord>,
    #[serde(default)]
    pub github_research_data: Vec<GithubResearchRecord>,
    #[serde(default)]
    pub generated_articles: Vec<GeneratedArticleRecord>,
}

impl Tables {
    pub(crate) fn insert_research(
        &mut self,
        result: &ResearchResult,
        repo_hint: Option<&str>,
    ) -> SessionId {
        let id = SessionId::generate();
        self.research_sessions.push(ResearchSessionRecord::new(id.clone(), result, repo_hint));
        if let Some(row) = GithubResearchRecord::from_result(&id, result) {
            self.github_research_data.push(row);
        }
        id
    }

    pub(crate) fn insert_article(
        &mut self,
        session_id: &SessionId,
        content: &str,
        tone: Tone,
        seo: &SeoSettings,
    ) -> Result<(), PersistenceError> {
        if !self.research_sessions.iter().any(|s| &s.id == session_id) {
            return Err(PersistenceError::UnknownSession(session_id.clone()));
        }
        self.generated_articles.push(GeneratedArticleRecord {
            research_session_id: session_id.clone(),
            content: content.to_string(),
            tone,
            seo_settings: seo.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }
}

/// Gateway keeping everything in process memory.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    tables: Mutex<Tables>,
    failure: Mutex<Option<String>>,
}

impl InMemoryGateway {
    /// Create an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `reason` (`None` restores normal operation).
    pub fn set_failure(&self, reason: Option<&str>) {
        *self.failure.lock() = reason.map(str::to_string);
    }

    /// Stored repository rows.
    pub fn github_rows(&self) -> Vec<GithubResearchRecord> {
        self.tables.lock().github_research_data.clone()
    }

    /// Stored articles.
    pub fn articles(&self) -> Vec<GeneratedArticleRecord> {
        self.tables.lock().generated_articles.clone()
    }

    fn check(&self) -> Result<(), PersistenceError> {
        match self.failure.lock().as_ref() {
            Some(reason) => Err(PersistenceError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn save_research(
        &self,
        result: &ResearchResult,
        repo_hint: Option<&str>,
    ) -> Result<SessionId, PersistenceError> {
        self.check()?;
        Ok(self.tables.lock().insert_research(result, repo_hint))
    }

    async fn save_article(
        &self,
        session_id: &SessionId,
        content: &str,
        tone: Tone,
        seo: &SeoSettings,
    ) -> Result<(), PersistenceError> {
        self.check()?;
        self.tables.lock().insert_article(session_id, content, tone, seo)
    }

    async fn list_sessions(&self) -> Result<Vec<ResearchSessionRecord>, PersistenceError> {
        self.check()?;
        Ok(self.tables.lock().research_sessions.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    #[tokio::test]
    async fn test_save_research_and_article() {
        let gateway = InMemoryGateway::new();
        let mut result = fixtures::research_result();
        result.github_data = Some(fixtures::github_data("acme/widgets"));

        let id = gateway.save_research(&result, Some("acme/widgets")).await.unwrap();
        assert_eq!(gateway.github_rows().len(), 1);

        let seo = SeoSettings::with_keyword("marketing AI");
        gateway.save_article(&id, "# Titolo", Tone::Formale, &seo).await.unwrap();

        let articles = gateway.articles();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].research_session_id, id);
        assert_eq!(articles[0].tone, Tone::Formale);
        assert_eq!(gateway.list_sessions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_article_requires_known_session() {
        let gateway = InMemoryGateway::new();
        let seo = SeoSettings::with_keyword("seo");
        let err = gateway
            .save_article(&SessionId("missing".into()), "x", Tone::Datapizza, &seo)
            .await
            .unwrap_err();
        assert!(matches!(err, PersistenceError::UnknownSession(_)));
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let gateway = InMemoryGateway::new();
        gateway.set_failure(Some("offline"));
        let err = gateway.save_research(&fixtures::research_result(), None).await.unwrap_err();
        assert!(err.to_string().contains("offline"));

        gateway.set_failure(None);
        assert!(gateway.save_research(&fixtures::research_result(), None).await.is_ok());
    }
}

//! Content services.
//!
//! The wizard talks to research, generation and review through these traits.
//! The bundled implementations are fixed-delay mocks returning literal copy;
//! a real backend only has to implement the same traits.

pub mod fixtures;
mod mock;

pub use mock::{MockArticleService, MockResearchService, MockReviewService};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::{ResearchResult, SeoSettings, Timing, Tone};

/// A validated research request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchQuery {
    /// Trimmed topic description
    pub topic: String,
    /// Repository to decorate the result with (`owner/name`)
    pub repo: Option<String>,
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationQuery {
    /// Research the article is based on
    pub research: ResearchResult,
    /// Tone of voice
    pub tone: Tone,
    /// SEO parameters
    pub seo: SeoSettings,
}

/// Outcome of a technical review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    /// Review text shown to the user
    pub analysis_text: String,
    /// Article with the suggested revisions applied
    pub revised_article: String,
}

/// Service failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Produces research results for a topic.
#[async_trait]
pub trait ResearchService: Send + Sync {
    /// Research a topic.
    async fn research(&self, query: &ResearchQuery) -> Result<ResearchResult, ServiceError>;

    /// Get the service name.
    fn name(&self) -> &str;
}

/// Produces an article body from research and settings.
#[async_trait]
pub trait ArticleGenerationService: Send + Sync {
    /// Generate an article.
    async fn generate(&self, query: &GenerationQuery) -> Result<String, ServiceError>;

    /// Get the service name.
    fn name(&self) -> &str;
}

/// Reviews an article and proposes a revision.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Analyse an article.
    async fn review(&self, article: &str) -> Result<ReviewResult, ServiceError>;

    /// Get the service name.
    fn name(&self) -> &str;
}

/// The three services a session needs, shareable across tasks.
#[derive(Clone)]
pub struct Services {
    /// Research provider
    pub research: Arc<dyn ResearchService>,
    /// Article generator
    pub articles: Arc<dyn ArticleGenerationService>,
    /// Technical reviewer
    pub review: Arc<dyn ReviewService>,
}

impl Services {
    /// Mock services using the configured delays.
    pub fn mock(timing: &Timing) -> Self {
        Self {
            research: Arc::new(MockResearchService::new(timing.research_delay())),
            articles: Arc::new(MockArticleService::new(timing.generation_delay())),
            review: Arc::new(MockReviewService::new(timing.review_duration())),
        }
    }

    /// Mock services that answer immediately.
    pub fn instant() -> Self {
        Self::mock(&Timing::instant())
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("research", &self.research.name())
            .field("articles", &self.articles.name())
            .field("review", &self.review.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_service_names() {
        let services = Services::instant();
        assert_eq!(services.research.name(), "mock-research");
        assert_eq!(services.articles.name(), "mock-writer");
        assert_eq!(services.review.name(), "el-director");
    }

    #[test]
    fn test_review_result_camel_case() {
        let result =
            ReviewResult { analysis_text: "a".to_string(), revised_article: "b".to_string() };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["analysisText"], "a");
        assert_eq!(json["revisedArticle"], "b");
    }
}

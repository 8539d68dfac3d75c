//! Fixed-delay mock services.
//!
//! Each mock sleeps for its configured delay, then returns the literal
//! fixtures. A zero delay skips the sleep entirely.

use std::time::Duration;

use async_trait::async_trait;

use super::{
    fixtures, ArticleGenerationService, GenerationQuery, ResearchQuery, ResearchResult,
    ResearchService, ReviewResult, ReviewService, ServiceError,
};
use crate::review::revise_article;

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Research mock: returns the marketing fixture, decorated with repository
/// metadata when a repository was requested.
#[derive(Debug, Clone, Default)]
pub struct MockResearchService {
    delay: Duration,
}

impl MockResearchService {
    /// Create a mock that answers after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResearchService for MockResearchService {
    async fn research(&self, query: &ResearchQuery) -> Result<ResearchResult, ServiceError> {
        tracing::debug!(topic = %query.topic, repo = ?query.repo, "mock research");
        simulate(self.delay).await;

        let mut result = fixtures::research_result();
        if let Some(repo) = &query.repo {
            result.github_data = Some(fixtures::github_data(repo));
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "mock-research"
    }
}

/// Generation mock: renders the article template with the SEO keywords.
#[derive(Debug, Clone, Default)]
pub struct MockArticleService {
    delay: Duration,
}

impl MockArticleService {
    /// Create a mock that answers after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ArticleGenerationService for MockArticleService {
    async fn generate(&self, query: &GenerationQuery) -> Result<String, ServiceError> {
        tracing::debug!(tone = %query.tone, keyword = %query.seo.main_keyword, "mock generation");
        simulate(self.delay).await;
        Ok(fixtures::render_article(&query.seo))
    }

    fn name(&self) -> &str {
        "mock-writer"
    }
}

/// Review mock ("El Director"): fixed analysis plus the canonical revisions.
#[derive(Debug, Clone, Default)]
pub struct MockReviewService {
    duration: Duration,
}

impl MockReviewService {
    /// Create a mock whose analysis takes `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl ReviewService for MockReviewService {
    async fn review(&self, article: &str) -> Result<ReviewResult, ServiceError> {
        tracing::debug!(chars = article.len(), "mock review");
        simulate(self.duration).await;
        Ok(ReviewResult {
            analysis_text: fixtures::REVIEW_ANALYSIS.to_string(),
            revised_article: revise_article(article),
        })
    }

    fn name(&self) -> &str {
        "el-director"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SeoSettings, Tone};

    #[tokio::test]
    async fn test_research_without_repo() {
        let service = MockResearchService::default();
        let query = ResearchQuery { topic: "Marketing locale con AI".to_string(), repo: None };
        let result = service.research(&query).await.unwrap();
        assert!(result.github_data.is_none());
        assert_eq!(result.key_insights.len(), 5);
    }

    #[tokio::test]
    async fn test_research_with_repo() {
        let service = MockResearchService::default();
        let query = ResearchQuery {
            topic: "Marketing locale con AI".to_string(),
            repo: Some("acme/widgets".to_string()),
        };
        let result = service.research(&query).await.unwrap();
        let github = result.github_data.unwrap();
        assert_eq!(github.repo, "acme/widgets");
        assert_eq!(github.issues.len(), 3);
        assert_eq!(github.pull_requests.len(), 2);
    }

    #[tokio::test]
    async fn test_generation_is_deterministic() {
        let service = MockArticleService::default();
        let query = GenerationQuery {
            research: fixtures::research_result(),
            tone: Tone::Formale,
            seo: SeoSettings::with_keyword("marketing AI"),
        };
        let first = service.generate(&query).await.unwrap();
        let second = service.generate(&query).await.unwrap();
        assert_eq!(first, second);
        assert!(first.contains("marketing AI"));
    }

    #[tokio::test]
    async fn test_review_revises_article() {
        let service = MockReviewService::default();
        let result = service.review(fixtures::ARTICLE_BODY).await.unwrap();
        assert_eq!(result.analysis_text, fixtures::REVIEW_ANALYSIS);
        assert_ne!(result.revised_article, fixtures::ARTICLE_BODY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_research_waits_for_delay() {
        let service = MockResearchService::new(Duration::from_secs(2));
        let query = ResearchQuery { topic: "Marketing locale con AI".to_string(), repo: None };
        let started = tokio::time::Instant::now();
        service.research(&query).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}

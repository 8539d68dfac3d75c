//! Session persistence.
//!
//! The wizard forwards finished research and generated articles to a
//! [`PersistenceGateway`]. Saving is best effort: callers report failures and
//! carry on with the in-memory session.
//!
//! Records mirror the three tables of the backing store:
//! `research_sessions`, `github_research_data` and `generated_articles`.

mod file;
mod memory;

pub use file::JsonFileGateway;
pub use memory::InMemoryGateway;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{Config, Link, ResearchResult, SeoSettings, Tone};

/// Input text stored with every research session.
pub const RESEARCH_INPUT_TEXT: &str = "Generated research";

/// Identifier of a stored research session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row of `research_sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSessionRecord {
    pub id: SessionId,
    pub input_text: String,
    pub overview: String,
    pub key_insights: Vec<String>,
    pub statistics: Vec<String>,
    pub trends: Vec<String>,
    pub sources: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ResearchSessionRecord {
    /// Build a record for a freshly saved research result.
    pub fn new(id: SessionId, result: &ResearchResult, repo_hint: Option<&str>) -> Self {
        Self {
            id,
            input_text: RESEARCH_INPUT_TEXT.to_string(),
            overview: result.overview.clone(),
            key_insights: result.key_insights.clone(),
            statistics: result.statistics.clone(),
            trends: result.trends.clone(),
            sources: result.sources.clone(),
            github_repo: repo_hint.map(str::to_string),
            created_at: Utc::now(),
        }
    }
}

/// Row of `github_research_data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubResearchRecord {
    pub research_session_id: SessionId,
    pub repo_name: String,
    pub stars: u32,
    pub last_update: String,
    pub issues: Vec<Link>,
    pub pull_requests: Vec<Link>,
}

impl GithubResearchRecord {
    /// Build the repository row for a research result, if it carries one.
    pub fn from_result(id: &SessionId, result: &ResearchResult) -> Option<Self> {
        result.github_data.as_ref().map(|data| Self {
            research_session_id: id.clone(),
            repo_name: data.repo.clone(),
            stars: data.stars,
            last_update: data.last_update.clone(),
            issues: data.issues.clone(),
            pull_requests: data.pull_requests.clone(),
        })
    }
}

/// Row of `generated_articles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArticleRecord {
    pub research_session_id: SessionId,
    pub content: String,
    pub tone: Tone,
    pub seo_settings: SeoSettings,
    pub created_at: DateTime<Utc>,
}

/// Persistence failure.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Unknown research session: {0}")]
    UnknownSession(SessionId),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Destination for finished research and generated articles.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Store a research result. Returns the new session id.
    async fn save_research(
        &self,
        result: &ResearchResult,
        repo_hint: Option<&str>,
    ) -> Result<SessionId, PersistenceError>;

    /// Store a generated article under an existing session.
    async fn save_article(
        &self,
        session_id: &SessionId,
        content: &str,
        tone: Tone,
        seo: &SeoSettings,
    ) -> Result<(), PersistenceError>;

    /// All stored research sessions, oldest first.
    async fn list_sessions(&self) -> Result<Vec<ResearchSessionRecord>, PersistenceError>;

    /// Get the gateway name.
    fn name(&self) -> &str;
}

/// Gateway selected by the storage configuration.
///
/// Falls back to an in-memory store when storage is disabled, no data
/// directory exists, or the file store cannot be opened.
pub fn open_gateway(config: &Config) -> Arc<dyn PersistenceGateway> {
    if !config.storage.enabled {
        return Arc::new(InMemoryGateway::new());
    }

    let Some(path) = config.store_path() else {
        tracing::warn!("no data directory, sessions kept in memory");
        return Arc::new(InMemoryGateway::new());
    };

    match JsonFileGateway::open(&path) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "session store unavailable, using memory");
            Arc::new(InMemoryGateway::new())
        }
    }
}

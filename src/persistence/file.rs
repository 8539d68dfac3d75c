//! JSON file gateway.
//!
//! Keeps the three tables in a single pretty-printed JSON document, rewritten
//! after every insert. An insert only becomes visible once it is on disk.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::memory::Tables;
use super::{PersistenceError, PersistenceGateway, ResearchSessionRecord, SessionId};
use crate::core::{ResearchResult, SeoSettings, Tone};

/// Gateway backed by a local JSON file.
#[derive(Debug)]
pub struct JsonFileGateway {
    path: PathBuf,
    tables: Mutex<Tables>,
}

impl JsonFileGateway {
    /// Open the store at `path`, creating an empty one if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let tables = Self::load(&path)?;
        tracing::debug!(path = %path.display(), sessions = tables.research_sessions.len(), "session store opened");
        Ok(Self { path, tables: Mutex::new(tables) })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Tables, PersistenceError> {
        if !path.exists() {
            return Ok(Tables::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Tables::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn flush(&self, tables: &Tables) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(tables)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for JsonFileGateway {
    async fn save_research(
        &self,
        result: &ResearchResult,
        repo_hint: Option<&str>,
    ) -> Result<SessionId, PersistenceError> {
        let mut tables = self.tables.lock();
        let mut next = tables.clone();
        let id = next.insert_research(result, repo_hint);
        self.flush(&next)?;
        *tables = next;
        tracing::info!(session = %id, "research saved");
        Ok(id)
    }

    async fn save_article(
        &self,
        session_id: &SessionId,
        content: &str,
        tone: Tone,
        seo: &SeoSettings,
    ) -> Result<(), PersistenceError> {
        let mut tables = self.tables.lock();
        let mut next = tables.clone();
        next.insert_article(session_id, content, tone, seo)?;
        self.flush(&next)?;
        *tables = next;
        tracing::info!(session = %session_id, "article saved");
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<ResearchSessionRecord>, PersistenceError> {
        Ok(self.tables.lock().research_sessions.clone())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

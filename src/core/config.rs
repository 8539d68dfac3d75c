//! Configuration management for Copydesk.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::model::{SeoSettings, Tone};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "COPYDESK_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Simulated service delays
    pub timing: Timing,

    /// Local session store
    pub storage: StorageConfig,

    /// Article export settings
    pub export: ExportConfig,

    /// UI/TUI settings
    pub ui: UiConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Tone preselected in the settings form
    pub default_tone: String,

    /// Word count preselected in the settings form
    pub default_word_count: u32,

    /// Whether to raise desktop notifications when a long step finishes
    pub desktop_notifications: bool,
}

/// Delays of the mock services, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Research delay
    pub research_delay_ms: u64,

    /// Article generation delay
    pub generation_delay_ms: u64,

    /// Duration of the review analysis
    pub review_duration_ms: u64,
}

/// Local persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Whether research sessions and articles are saved
    pub enabled: bool,

    /// Path of the JSON store (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Article export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory downloaded articles are written to (`~` is expanded)
    pub download_dir: String,

    /// Clipboard command override (e.g. `wl-copy`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard_command: Option<String>,
}

/// UI/TUI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (default, dracula, nord)
    pub theme: String,

    /// How long a notice stays on screen
    pub notice_ttl_ms: u64,

    /// Whether to show the help hint line
    pub show_hints: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. the file named by `COPYDESK_CONFIG`
    /// 2. `.copydesk.toml` in current directory
    /// 3. `~/.config/copydesk/config.toml`
    /// 4. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        match Self::resolve_path() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// File [`Config::load`] reads, if any.
    ///
    /// A path named by `COPYDESK_CONFIG` is returned even when missing.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(shellexpand::tilde(&explicit).into_owned()));
        }

        let local_config = PathBuf::from(".copydesk.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        Self::config_dir().map(|d| d.join("config.toml")).filter(|p| p.exists())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("copydesk"))
    }

    /// Get the data directory path (session store).
    pub fn data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("copydesk"))
    }

    /// Resolved path of the JSON session store.
    pub fn store_path(&self) -> Option<PathBuf> {
        match &self.storage.path {
            Some(path) => Some(PathBuf::from(shellexpand::tilde(path).into_owned())),
            None => Self::data_dir().map(|d| d.join("sessions.json")),
        }
    }

    /// Resolved download directory.
    pub fn download_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.export.download_dir).into_owned())
    }

    /// How long notices stay on screen.
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.notice_ttl_ms)
    }

    /// Tone preselected in the wizard. Unknown names fall back to the default.
    pub fn default_tone(&self) -> Tone {
        self.general.default_tone.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring configured tone");
            Tone::default()
        })
    }

    /// SEO settings preselected in the wizard.
    pub fn default_seo(&self) -> SeoSettings {
        let mut seo = SeoSettings::default();
        seo.set_word_count(self.general.default_word_count);
        seo
    }
}

impl Timing {
    /// Zero delays everywhere.
    pub fn instant() -> Self {
        Self { research_delay_ms: 0, generation_delay_ms: 0, review_duration_ms: 0 }
    }

    /// Research delay.
    pub fn research_delay(&self) -> Duration {
        Duration::from_millis(self.research_delay_ms)
    }

    /// Generation delay.
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// Review analysis duration.
    pub fn review_duration(&self) -> Duration {
        Duration::from_millis(self.review_duration_ms)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_tone: "datapizza".to_string(),
            default_word_count: 1200,
            desktop_notifications: false,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self { research_delay_ms: 1500, generation_delay_ms: 2000, review_duration_ms: 10_000 }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { enabled: true, path: None }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { download_dir: ".".to_string(), clipboard_command: None }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "default".to_string(), notice_ttl_ms: 4000, show_hints: true }
    }
}

//! Core types and functionality for Copydesk.
//!
//! This module contains the fundamental data structures used throughout
//! the application: the content model, validation, notices, configuration
//! and article export.

mod config;
mod export;
mod model;
mod notice;
mod validation;

pub use config::{
    Config, ExportConfig, GeneralConfig, StorageConfig, Timing, UiConfig, CONFIG_ENV,
};
pub use export::{copy_to_clipboard, download_filename, write_article, DOWNLOAD_PREFIX};
pub use model::{
    preview_html, GithubData, Link, ResearchResult, SeoSettings, Tone, META_DESCRIPTION_MAX,
    WORD_COUNT_MAX, WORD_COUNT_MIN, WORD_COUNT_STEP,
};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use validation::{
    is_valid_repo, validate_keyword, validate_repo, validate_topic, ValidationError,
    MIN_TOPIC_CHARS,
};

/// Raise a desktop notification for a finished step.
#[cfg(feature = "notifications")]
pub fn send_notification(summary: &str, body: &str) {
    use notify_rust::Notification;

    let _ = Notification::new()
        .summary(&format!("Copydesk: {}", summary))
        .body(body)
        .icon("dialog-information")
        .appname("copydesk")
        .timeout(5000)
        .show();
}

/// No-op notification when feature is disabled.
#[cfg(not(feature = "notifications"))]
pub fn send_notification(_summary: &str, _body: &str) {}

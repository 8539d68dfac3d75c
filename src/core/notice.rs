//! User-visible notices.
//!
//! Short-lived messages raised by the wizard and the review flow. Each state
//! holder owns its own board; front-ends show the latest live entry.

use std::time::{Duration, Instant};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A step finished successfully
    Success,
    /// Something was rejected or failed
    Error,
}

/// A single notice.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Severity
    pub kind: NoticeKind,
    /// When the notice was raised
    pub raised_at: Instant,
}

impl Notice {
    /// Create a notice raised now.
    pub fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), kind, raised_at: Instant::now() }
    }

    /// Success notice.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, description)
    }

    /// Error notice.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, description)
    }

    /// Whether the notice is an error.
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// Whether the notice is still shown after `ttl`.
    pub fn is_live(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) < ttl
    }
}

/// Ordered list of notices raised by one state holder.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a notice.
    pub fn push(&mut self, notice: Notice) {
        tracing::debug!(title = %notice.title, kind = ?notice.kind, "notice");
        self.notices.push(notice);
    }

    /// Most recent notice.
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Most recent notice still live at `now`.
    pub fn latest_live(&self, now: Instant, ttl: Duration) -> Option<&Notice> {
        self.notices.last().filter(|n| n.is_live(now, ttl))
    }

    /// Whether any notice carries the given title.
    pub fn contains_title(&self, title: &str) -> bool {
        self.notices.iter().any(|n| n.title == title)
    }

    /// Number of notices raised.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Whether no notice was raised.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Move every notice out of the board.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Drop notices no longer live at `now`.
    pub fn prune_expired(&mut self, now: Instant, ttl: Duration) {
        self.notices.retain(|n| n.is_live(now, ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_latest() {
        let mut board = NoticeBoard::new();
        assert!(board.latest().is_none());

        board.push(Notice::success("a", "first"));
        board.push(Notice::error("b", "second"));

        assert_eq!(board.len(), 2);
        assert_eq!(board.latest().unwrap().title, "b");
        assert!(board.latest().unwrap().is_error());
        assert!(board.contains_title("a"));
    }

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::success("ok", "");
        let ttl = Duration::from_secs(4);
        assert!(notice.is_live(notice.raised_at, ttl));
        assert!(!notice.is_live(notice.raised_at + Duration::from_secs(5), ttl));
    }

    #[test]
    fn test_prune_keeps_live_notices() {
        let mut board = NoticeBoard::new();
        board.push(Notice::success("old", ""));
        let ttl = Duration::from_secs(4);
        let later = board.latest().unwrap().raised_at + Duration::from_secs(5);
        board.push(Notice { raised_at: later, ..Notice::error("new", "") });

        board.prune_expired(later, ttl);
        assert_eq!(board.len(), 1);
        assert!(board.contains_title("new"));
        assert!(!board.contains_title("old"));
    }

    #[test]
    fn test_drain_empties_board() {
        let mut board = NoticeBoard::new();
        board.push(Notice::success("x", "y"));
        assert_eq!(board.drain().len(), 1);
        assert!(board.is_empty());
    }
}

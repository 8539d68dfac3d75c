//! Payloads exchanged between the wizard and the review flow.
//!
//! The two flows never share state. The wizard posts a [`ReviewRequest`] when
//! the user asks for a review; the review flow posts a [`ReviewReturn`] when
//! the user commits the revised text. Each payload travels through a
//! [`Mailbox`] and is consumed exactly once.

use serde::{Deserialize, Serialize};

/// Article sent to the review flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    /// Article text to review
    pub article_content: String,
}

impl ReviewRequest {
    /// Create a request for `article_content`.
    pub fn new(article_content: impl Into<String>) -> Self {
        Self { article_content: article_content.into() }
    }
}

/// Flow a returned article comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoffSource {
    /// The technical review flow
    Review,
}

/// Revised article handed back to the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReturn {
    /// Article text after the review edits
    pub modified_article: String,
    /// Originating flow
    pub source: HandoffSource,
}

impl ReviewReturn {
    /// Create a payload coming from the review flow.
    pub fn from_review(modified_article: impl Into<String>) -> Self {
        Self { modified_article: modified_article.into(), source: HandoffSource::Review }
    }
}

/// One-shot slot carrying a payload across a navigation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Mailbox<T> {
    /// Create an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a payload, replacing any unread one.
    pub fn post(&mut self, payload: T) {
        self.slot = Some(payload);
    }

    /// Take the payload, leaving the mailbox empty.
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Whether a payload is waiting.
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailbox_consumed_once() {
        let mut mailbox = Mailbox::new();
        assert!(!mailbox.is_pending());

        mailbox.post(ReviewRequest::new("testo"));
        assert!(mailbox.is_pending());
        assert_eq!(mailbox.take(), Some(ReviewRequest::new("testo")));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_payload_wire_shape() {
        let request = serde_json::to_value(ReviewRequest::new("a")).unwrap();
        assert_eq!(request, serde_json::json!({ "articleContent": "a" }));

        let back = serde_json::to_value(ReviewReturn::from_review("b")).unwrap();
        assert_eq!(back, serde_json::json!({ "modifiedArticle": "b", "source": "review" }));
    }
}

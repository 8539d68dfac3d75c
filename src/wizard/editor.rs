//! Article editor: committed text plus an editable draft.

/// What a call to [`ArticleEditor::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Editing started; the draft was seeded from the committed article
    Started,
    /// Editing stopped and the changed draft was committed
    Saved,
    /// Editing stopped with an unchanged draft
    Unchanged,
}

/// Holds the committed article and the draft edited alongside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleEditor {
    committed: Option<String>,
    draft: String,
    editing: bool,
}

impl ArticleEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed article, if one exists.
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Current draft.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether edit mode is on.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Text the user currently sees: the draft while editing, else the committed article.
    pub fn visible(&self) -> Option<&str> {
        if self.editing {
            Some(&self.draft)
        } else {
            self.committed()
        }
    }

    /// Replace both representations with freshly produced text and leave edit mode.
    pub fn replace(&mut self, text: String) {
        self.draft.clone_from(&text);
        self.committed = Some(text);
        self.editing = false;
    }

    /// Flip edit mode.
    pub fn toggle(&mut self) -> EditOutcome {
        if self.editing {
            self.editing = false;
            if self.committed.as_deref() == Some(self.draft.as_str()) {
                EditOutcome::Unchanged
            } else {
                self.committed = Some(self.draft.clone());
                EditOutcome::Saved
            }
        } else {
            self.draft = self.committed.clone().unwrap_or_default();
            self.editing = true;
            EditOutcome::Started
        }
    }

    /// Replace the draft. Ignored outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.editing {
            self.draft = text.into();
        }
    }

    /// Mutable draft, while editing.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        self.editing.then_some(&mut self.draft)
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_unchanged() {
        let mut editor = ArticleEditor::new();
        editor.replace("# Titolo".to_string());

        assert_eq!(editor.toggle(), EditOutcome::Started);
        assert!(editor.is_editing());
        assert_eq!(editor.draft(), "# Titolo");
        assert_eq!(editor.toggle(), EditOutcome::Unchanged);
        assert_eq!(editor.committed(), Some("# Titolo"));
    }

    #[test]
    fn test_edit_commits_draft() {
        let mut editor = ArticleEditor::new();
        editor.replace("# Titolo".to_string());
        editor.toggle();
        editor.draft_mut().unwrap().push_str("\n\nNuovo paragrafo");

        assert_eq!(editor.visible(), Some("# Titolo\n\nNuovo paragrafo"));
        assert_eq!(editor.committed(), Some("# Titolo"));
        assert_eq!(editor.toggle(), EditOutcome::Saved);
        assert_eq!(editor.committed(), Some("# Titolo\n\nNuovo paragrafo"));
    }

    #[test]
    fn test_draft_locked_outside_edit_mode() {
        let mut editor = ArticleEditor::new();
        editor.replace("a".to_string());
        editor.set_draft("b");
        assert_eq!(editor.draft(), "a");
        assert!(editor.draft_mut().is_none());
    }

    #[test]
    fn test_replace_leaves_edit_mode() {
        let mut editor = ArticleEditor::new();
        editor.replace("a".to_string());
        editor.toggle();
        editor.set_draft("draft");
        editor.replace("b".to_string());
        assert!(!editor.is_editing());
        assert_eq!(editor.draft(), "b");
        assert_eq!(editor.committed(), Some("b"));
    }
}

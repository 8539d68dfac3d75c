//! User-added insights shown after the researched ones.

/// Overlay of custom insights. Kept apart from the research result and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomInsights {
    items: Vec<String>,
}

impl CustomInsights {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an insight. Input is trimmed; empty input is ignored.
    ///
    /// Returns whether anything was added.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Custom insights, in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of custom insights.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the overlay is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_skips_empty() {
        let mut overlay = CustomInsights::new();
        assert!(!overlay.add("   "));
        assert!(overlay.add("  Il locale conta  "));
        assert_eq!(overlay.items(), ["Il locale conta"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let mut overlay = CustomInsights::new();
        overlay.add("uguale");
        overlay.add("uguale");
        assert_eq!(overlay.len(), 2);
    }
}

//! Canonical revisions applied by the technical review.
//!
//! Two phrases get highlighted and explained, first occurrence only. Articles
//! without them come back unchanged.

/// Phrase substitutions, applied in order.
pub const REVISIONS: [(&str, &str); 2] = [
    (
        "AI generativa",
        "**AI generativa** (modelli come GPT-4 capaci di produrre testo, immagini e codice)",
    ),
    (
        "prompt engineering",
        "**prompt engineering** (la progettazione strutturata delle istruzioni fornite al modello)",
    ),
];

/// Apply the canonical revisions to `article`.
pub fn revise_article(article: &str) -> String {
    REVISIONS
        .iter()
        .fold(article.to_string(), |text, (phrase, replacement)| text.replacen(phrase, replacement, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_phrases_is_noop() {
        let article = "# Titolo\n\nNessuna frase canonica qui.";
        assert_eq!(revise_article(article), article);
    }

    #[test]
    fn test_both_phrases_highlighted() {
        let article = "Usa l'AI generativa con il prompt engineering.";
        let revised = revise_article(article);
        assert!(revised.contains("**AI generativa** (modelli come GPT-4"));
        assert!(revised.contains("**prompt engineering** (la progettazione"));
    }

    #[test]
    fn test_only_first_occurrence() {
        let revised = revise_article("prompt engineering e ancora prompt engineering");
        assert_eq!(revised.matches("**prompt engineering**").count(), 1);
        assert!(revised.ends_with("e ancora prompt engineering"));
    }

    #[test]
    fn test_revision_is_deterministic() {
        let article = "AI generativa";
        assert_eq!(revise_article(article), revise_article(article));
    }
}

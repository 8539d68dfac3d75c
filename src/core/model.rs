//! Wizard data model.
//!
//! Plain data shared by the wizard, the review flow, the services and the
//! persistence layer: tone, SEO settings and research results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Soft cap for the meta description, in characters.
pub const META_DESCRIPTION_MAX: usize = 160;

/// Smallest selectable article length, in words.
pub const WORD_COUNT_MIN: u32 = 300;

/// Largest selectable article length, in words.
pub const WORD_COUNT_MAX: u32 = 3000;

/// Step of the article length selector.
pub const WORD_COUNT_STEP: u32 = 100;

/// Tone of voice used for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Informal, direct and engaging
    #[default]
    Datapizza,
    /// Professional, authoritative and structured
    Formale,
}

impl Tone {
    /// All tones, in selector order.
    pub const ALL: [Self; 2] = [Self::Datapizza, Self::Formale];

    /// Identifier stored alongside generated articles.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Datapizza => "datapizza",
            Self::Formale => "formale",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Datapizza => "Tono di Datapizza",
            Self::Formale => "Tono Formale",
        }
    }

    /// One-line description shown under the label.
    pub fn description(self) -> &'static str {
        match self {
            Self::Datapizza => "Informale, diretto e coinvolgente, con un tocco di personalità",
            Self::Formale => "Professionale, autorevole e strutturato",
        }
    }

    /// The other tone.
    pub fn toggled(self) -> Self {
        match self {
            Self::Datapizza => Self::Formale,
            Self::Formale => Self::Datapizza,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "datapizza" => Ok(Self::Datapizza),
            "formale" => Ok(Self::Formale),
            other => Err(format!("unknown tone '{other}' (expected datapizza or formale)")),
        }
    }
}

/// SEO parameters configured before generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    /// Main keyword; must be non-empty for generation to proceed
    pub main_keyword: String,
    /// Comma-separated secondary keywords (free text)
    pub secondary_keywords: String,
    /// Meta description shown in search results
    pub meta_description: String,
    /// Target article length in words
    pub word_count: u32,
    /// Target keyword density, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_density: Option<f32>,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            main_keyword: String::new(),
            secondary_keywords: String::new(),
            meta_description: String::new(),
            word_count: 1200,
            keyword_density: Some(2.0),
        }
    }
}

impl SeoSettings {
    /// Create settings with the given main keyword and defaults elsewhere.
    pub fn with_keyword(main_keyword: impl Into<String>) -> Self {
        Self { main_keyword: main_keyword.into(), ..Self::default() }
    }

    /// Whether the main keyword is present once trimmed.
    pub fn has_main_keyword(&self) -> bool {
        !self.main_keyword.trim().is_empty()
    }

    /// Secondary keywords split on commas, trimmed, empties dropped.
    pub fn secondary_keyword_list(&self) -> Vec<&str> {
        self.secondary_keywords.split(',').map(str::trim).filter(|k| !k.is_empty()).collect()
    }

    /// Set the meta description, truncated to the soft cap.
    pub fn set_meta_description(&mut self, text: &str) {
        self.meta_description = text.chars().take(META_DESCRIPTION_MAX).collect();
    }

    /// Remaining characters before the meta description cap.
    pub fn meta_description_remaining(&self) -> usize {
        META_DESCRIPTION_MAX.saturating_sub(self.meta_description.chars().count())
    }

    /// Set the word count, clamped to the selectable range and snapped to the step.
    pub fn set_word_count(&mut self, words: u32) {
        let clamped = words.clamp(WORD_COUNT_MIN, WORD_COUNT_MAX);
        let snapped = (clamped + WORD_COUNT_STEP / 2) / WORD_COUNT_STEP * WORD_COUNT_STEP;
        self.word_count = snapped.clamp(WORD_COUNT_MIN, WORD_COUNT_MAX);
    }

    /// Increase the word count by one step.
    pub fn increase_word_count(&mut self) {
        self.set_word_count(self.word_count.saturating_add(WORD_COUNT_STEP));
    }

    /// Decrease the word count by one step.
    pub fn decrease_word_count(&mut self) {
        self.set_word_count(self.word_count.saturating_sub(WORD_COUNT_STEP));
    }

    /// Length bucket shown under the slider.
    pub fn length_label(&self) -> &'static str {
        match self.word_count {
            0..=1000 => "Breve",
            1001..=2000 => "Medio",
            _ => "Lungo",
        }
    }
}

/// A titled link (sources, issues, pull requests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display title
    pub title: String,
    /// Target URL
    pub url: String,
}

impl Link {
    /// Create a new link.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), url: url.into() }
    }
}

/// Repository metadata attached to a research result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubData {
    /// Repository identifier (`owner/name`)
    pub repo: String,
    /// Notable open issues
    pub issues: Vec<Link>,
    /// Notable pull requests
    pub pull_requests: Vec<Link>,
    /// Star count
    pub stars: u32,
    /// Human-readable last update
    pub last_update: String,
}

/// Outcome of a research step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    /// Overview text (paragraphs separated by blank lines)
    pub overview: String,
    /// Sources consulted
    pub sources: Vec<Link>,
    /// Key insights
    pub key_insights: Vec<String>,
    /// Statistics and data points
    pub statistics: Vec<String>,
    /// Market trends
    pub trends: Vec<String>,
    /// Repository metadata, when a repository was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_data: Option<GithubData>,
}

/// Render an article for preview: HTML-escaped, newlines as `<br />`.
pub fn preview_html(article: &str) -> String {
    let mut out = String::with_capacity(article.len() + article.len() / 8);
    for c in article.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br />"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_parsing() {
        assert_eq!("datapizza".parse::<Tone>().unwrap(), Tone::Datapizza);
        assert_eq!(" Formale ".parse::<Tone>().unwrap(), Tone::Formale);
        assert!("casual".parse::<Tone>().is_err());
        assert_eq!(Tone::default(), Tone::Datapizza);
        assert_eq!(Tone::Datapizza.toggled(), Tone::Formale);
    }

    #[test]
    fn test_tone_serialization() {
        assert_eq!(serde_json::to_string(&Tone::Formale).unwrap(), "\"formale\"");
    }

    #[test]
    fn test_seo_defaults() {
        let seo = SeoSettings::default();
        assert!(!seo.has_main_keyword());
        assert_eq!(seo.word_count, 1200);
        assert_eq!(seo.keyword_density, Some(2.0));
    }

    #[test]
    fn test_whitespace_keyword_is_missing() {
        let seo = SeoSettings::with_keyword("   \t");
        assert!(!seo.has_main_keyword());
    }

    #[test]
    fn test_secondary_keyword_list() {
        let mut seo = SeoSettings::default();
        seo.secondary_keywords = "AI marketing, prompt engineering,, automazione ".to_string();
        assert_eq!(
            seo.secondary_keyword_list(),
            vec!["AI marketing", "prompt engineering", "automazione"]
        );
    }

    #[test]
    fn test_meta_description_cap() {
        let mut seo = SeoSettings::default();
        seo.set_meta_description(&"è".repeat(200));
        assert_eq!(seo.meta_description.chars().count(), META_DESCRIPTION_MAX);
        assert_eq!(seo.meta_description_remaining(), 0);
    }

    #[test]
    fn test_word_count_bounds() {
        let mut seo = SeoSettings::default();
        seo.set_word_count(10);
        assert_eq!(seo.word_count, 300);
        seo.set_word_count(99_999);
        assert_eq!(seo.word_count, 3000);
        seo.set_word_count(1249);
        assert_eq!(seo.word_count, 1200);

        seo.set_word_count(3000);
        seo.increase_word_count();
        assert_eq!(seo.word_count, 3000);
        seo.set_word_count(300);
        seo.decrease_word_count();
        assert_eq!(seo.word_count, 300);
    }

    #[test]
    fn test_seo_camel_case() {
        let json = serde_json::to_value(SeoSettings::with_keyword("marketing AI")).unwrap();
        assert_eq!(json["mainKeyword"], "marketing AI");
        assert_eq!(json["wordCount"], 1200);
    }

    #[test]
    fn test_preview_html_escapes() {
        assert_eq!(preview_html("# A & B\n<b>"), "# A &amp; B<br />&lt;b&gt;");
    }
}

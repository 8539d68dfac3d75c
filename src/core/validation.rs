//! Input validation for wizard submissions.
//!
//! Checks performed before a phase transition is allowed:
//! - research topics must carry enough detail
//! - repository identifiers must look like `owner/name`
//! - generation needs a main keyword

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum trimmed length of a research topic, in characters.
pub const MIN_TOPIC_CHARS: usize = 10;

static REPO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("repository pattern is valid")
});

/// A rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("topic too short: {len} characters, at least {min} required")]
    TopicTooShort { len: usize, min: usize },

    #[error("invalid repository identifier '{0}', expected owner/name")]
    InvalidRepo(String),

    #[error("main keyword is missing")]
    MissingKeyword,
}

impl ValidationError {
    /// Notice title shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::TopicTooShort { .. } => "Input troppo breve",
            Self::InvalidRepo(_) => "Repository non valida",
            Self::MissingKeyword => "Parola chiave mancante",
        }
    }

    /// Notice description shown to the user.
    pub fn description(&self) -> String {
        match self {
            Self::TopicTooShort { .. } => {
                "Inserisci una descrizione più dettagliata per ottenere risultati migliori."
                    .to_string()
            }
            Self::InvalidRepo(repo) => {
                format!("\"{repo}\" non è nel formato proprietario/nome (es. openai/openai-python).")
            }
            Self::MissingKeyword => "Inserisci almeno la parola chiave principale.".to_string(),
        }
    }
}

/// Validate a research topic. Returns the trimmed topic.
pub fn validate_topic(topic: &str) -> Result<&str, ValidationError> {
    let trimmed = topic.trim();
    let len = trimmed.chars().count();
    if len < MIN_TOPIC_CHARS {
        return Err(ValidationError::TopicTooShort { len, min: MIN_TOPIC_CHARS });
    }
    Ok(trimmed)
}

/// Check whether a string is a well-formed `owner/name` repository identifier.
pub fn is_valid_repo(repo: &str) -> bool {
    REPO_PATTERN.is_match(repo)
}

/// Validate a repository identifier.
///
/// Surrounding whitespace is ignored; anything else outside the pattern,
/// including inner spaces or a second slash, is rejected.
pub fn validate_repo(repo: &str) -> Result<&str, ValidationError> {
    let trimmed = repo.trim();
    if is_valid_repo(trimmed) {
        Ok(trimmed)
    } else {
        Err(ValidationError::InvalidRepo(repo.to_string()))
    }
}

/// Validate the main keyword of the SEO settings.
pub fn validate_keyword(keyword: &str) -> Result<&str, ValidationError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingKeyword);
    }
    Ok(trimmed)
}

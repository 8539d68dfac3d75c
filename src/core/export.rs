//! Article export: file download and clipboard copy.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of downloaded article files.
pub const DOWNLOAD_PREFIX: &str = "articolo-";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static PATH_UNSAFE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("path character pattern is valid"));

/// File name for an article keyed by its main keyword.
///
/// Each whitespace run in the keyword becomes a single `-`, including runs
/// at either end. Path separators and characters not allowed in file names
/// become `-` one for one, so the file always lands directly in the target
/// directory.
pub fn download_filename(main_keyword: &str) -> String {
    let spaced = WHITESPACE.replace_all(main_keyword, "-");
    let slug = PATH_UNSAFE.replace_all(&spaced, "-");
    let mut name = String::with_capacity(DOWNLOAD_PREFIX.len() + slug.len() + 4);
    name.push_str(DOWNLOAD_PREFIX);
    name.push_str(&slug);
    name.push_str(".txt");
    name
}

/// Write `article` as a plain-text file in `dir`. Returns the file path.
pub fn write_article(dir: &Path, main_keyword: &str, article: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(download_filename(main_keyword));
    std::fs::write(&path, article)?;
    tracing::info!(path = %path.display(), "article downloaded");
    Ok(path)
}

/// Clipboard helpers tried in order when no override is configured.
fn clipboard_candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", vec![])]
    } else if cfg!(target_os = "windows") {
        vec![("clip", vec![])]
    } else {
        vec![
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
        ]
    }
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("{program} exited with {status}")))
    }
}

/// Copy `text` to the system clipboard.
///
/// `command` overrides the helper program (split on whitespace).
pub fn copy_to_clipboard(text: &str, command: Option<&str>) -> anyhow::Result<()> {
    if let Some(command) = command {
        let mut parts = command.split_whitespace();
        let program =
            parts.next().ok_or_else(|| anyhow::anyhow!("Empty clipboard command"))?;
        let args: Vec<&str> = parts.collect();
        return pipe_into(program, &args, text)
            .map_err(|e| anyhow::anyhow!("Clipboard command '{}' failed: {}", command, e));
    }

    for (program, args) in clipboard_candidates() {
        match pipe_into(program, &args, text) {
            Ok(()) => return Ok(()),
            Err(e) => tracing::debug!(program, error = %e, "clipboard helper failed"),
        }
    }

    anyhow::bail!("No clipboard helper available")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename("marketing AI"), "articolo-marketing-AI.txt");
        assert_eq!(download_filename("marketing \t con\n  AI"), "articolo-marketing-con-AI.txt");
        assert_eq!(download_filename(" seo "), "articolo--seo-.txt");
        assert_eq!(download_filename("seo"), "articolo-seo.txt");
    }

    #[test]
    fn test_download_filename_strips_path_characters() {
        assert_eq!(download_filename("AI/ML marketing"), "articolo-AI-ML-marketing.txt");
        assert_eq!(download_filename(r"C:\seo"), "articolo-C--seo.txt");
        assert_eq!(download_filename("perché? <AI>"), "articolo-perché---AI-.txt");

        let dir = tempfile::tempdir().unwrap();
        let path = write_article(dir.path(), "AI/ML marketing", "corpo").unwrap();
        assert_eq!(path.parent().unwrap(), dir.path());
        assert!(path.exists());
    }

    #[test]
    fn test_write_article() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_article(dir.path(), "marketing AI", "# Titolo\n\ncorpo").unwrap();
        assert_eq!(path.file_name().unwrap(), "articolo-marketing-AI.txt");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Titolo\n\ncorpo");
    }

    #[test]
    fn test_clipboard_override_failure() {
        let result = copy_to_clipboard("x", Some("copydesk-no-such-clipboard-helper"));
        assert!(result.is_err());
    }
}

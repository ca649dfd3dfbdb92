use crate::error::MarkdownError;

const TITLE_PREFIX: &str = "# ";

/// Returns the text of the first `# ` line, trimmed.
///
/// Only top-level headings count: `## Sub` is skipped, and the line must start
/// with the marker (no leading indentation).
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(MarkdownError::MissingTitle)
}

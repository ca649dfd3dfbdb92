/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or converter code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns true if the trimmed line starts with `>`.
    pub fn is_quote_line(line: &str) -> bool {
        line.trim().starts_with(Self::PREFIX)
    }

    /// Strips one `>` and any whitespace after it, then trims the rest.
    ///
    /// Lines without a prefix are only trimmed.
    pub fn strip_prefix(line: &str) -> &str {
        let line = line.trim();
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }
}

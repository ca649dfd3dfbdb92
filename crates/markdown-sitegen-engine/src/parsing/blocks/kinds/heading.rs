/// ATX heading block type.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Number of leading `#` characters.
    pub fn count_markers(block: &str) -> usize {
        block.chars().take_while(|&c| c == Self::MARKER).count()
    }

    /// Returns the level if `block` opens with 1-6 `#` followed by whitespace.
    pub fn level(block: &str) -> Option<u8> {
        let block = block.trim_start();
        let n = Self::count_markers(block);
        if n == 0 || n > Self::MAX_LEVEL {
            return None;
        }
        match block[n..].chars().next() {
            Some(c) if c.is_whitespace() => u8::try_from(n).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels() {
        assert_eq!(Heading::level("# Heading 1"), Some(1));
        assert_eq!(Heading::level("### Heading 3"), Some(3));
        assert_eq!(Heading::level("###### six"), Some(6));
    }

    #[test]
    fn not_headings() {
        assert_eq!(Heading::level("####### Not a Heading"), None);
        assert_eq!(Heading::level("#hashtag"), None);
        assert_eq!(Heading::level("#"), None);
        assert_eq!(Heading::level("plain"), None);
    }

    #[test]
    fn tab_after_marker() {
        assert_eq!(Heading::level("##\tTabbed"), Some(2));
    }
}

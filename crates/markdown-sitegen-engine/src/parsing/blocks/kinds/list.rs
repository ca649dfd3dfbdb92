use std::sync::OnceLock;

use regex::Regex;

/// Unordered list block type: `* item` or `- item`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// Returns the item text after the two-character marker, if present.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let line = line.trim();
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}

/// Ordered list block type: `1. item`.
pub struct OrderedList;

impl OrderedList {
    fn pattern() -> &'static Regex {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        ITEM_REGEX.get_or_init(|| {
            Regex::new(r"^([0-9]+)\.\s+(.*)$").expect("Invalid ordered list regex")
        })
    }

    /// Parses `<n>. <content>` from a trimmed line.
    pub fn parse_item(line: &str) -> Option<(u64, &str)> {
        let caps = Self::pattern().captures(line.trim())?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some((number, content))
    }

    /// Returns true if every line is an item and each number is one more than
    /// the previous. The first number is free.
    pub fn is_sequence<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        let mut expected: Option<u64> = None;
        let mut any = false;
        for line in lines {
            let Some((n, _)) = Self::parse_item(line) else {
                return false;
            };
            if expected.is_some_and(|e| e != n) {
                return false;
            }
            expected = n.checked_add(1);
            any = true;
        }
        any
    }
}

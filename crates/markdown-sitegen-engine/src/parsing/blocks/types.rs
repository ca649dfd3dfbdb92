/// The kind of a block, as decided by [`classify_block`](super::classify_block).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX heading, `#` through `######`.
    Heading {
        /// Number of leading `#` (1-6).
        level: u8,
    },
    /// A fenced code block.
    Code,
    /// A block where every line starts with `>`.
    Quote,
    /// `* item` / `- item` lines.
    UnorderedList,
    /// `1. item` lines with consecutive numbers.
    OrderedList,
    /// Anything else.
    Paragraph,
}

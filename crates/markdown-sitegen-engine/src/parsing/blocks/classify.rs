use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block. First match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub fn classify_block(block: &str) -> BlockKind {
    let block = block.trim();

    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }

    if CodeFence::encloses(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return BlockKind::Paragraph;
    }

    if lines.iter().all(|l| BlockQuote::is_quote_line(l)) {
        return BlockKind::Quote;
    }

    if lines
        .iter()
        .all(|l| UnorderedList::strip_marker(l).is_some())
    {
        return BlockKind::UnorderedList;
    }

    if OrderedList::is_sequence(lines.iter().copied()) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

//! Block → node conversion.
//!
//! Each [`BlockKind`] has one converter. Everything except code runs its text
//! through the inline tokenizer; code content becomes a single literal leaf.

use crate::{error::MarkdownError, node::Node};

use super::{
    blocks::{
        BlockKind, classify_block,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        split_into_blocks,
    },
    inline::text_to_children,
};

/// Parses a whole document into a single `<div>` node.
///
/// # Errors
/// [`MarkdownError::EmptyDocument`] if no block produces a node, or the first
/// error raised by any block.
pub fn markdown_to_node(markdown: &str) -> Result<Node, MarkdownError> {
    let mut children = Vec::new();

    for block in split_into_blocks(markdown) {
        let kind = classify_block(&block);
        log::debug!("converting {kind:?} block ({} bytes)", block.len());
        if let Some(node) = block_to_node(&block, kind)? {
            children.push(node);
        }
    }

    if children.is_empty() {
        return Err(MarkdownError::EmptyDocument);
    }
    Node::branch("div", children)
}

/// Converts one block. `Ok(None)` means the block has no content to render.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<Option<Node>, MarkdownError> {
    match kind {
        BlockKind::Heading { .. } => heading_to_node(block).map(Some),
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Code => code_to_node(block).map(Some),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block).map(Some),
        BlockKind::OrderedList => ordered_list_to_node(block).map(Some),
    }
}

/// `# text` → `<h1>`…`<h6>`.
///
/// # Errors
/// [`MarkdownError::InvalidHeading`] when the block does not start with 1-6 `#`.
pub fn heading_to_node(block: &str) -> Result<Node, MarkdownError> {
    let block = block.trim();
    let level = Heading::count_markers(block);
    if level == 0 || level > Heading::MAX_LEVEL {
        return Err(MarkdownError::InvalidHeading { level });
    }

    let text = block[level..].trim();
    Node::branch(format!("h{level}"), inline_children(text)?)
}

/// Lines joined with single spaces → `<p>`. Empty paragraphs yield nothing.
pub fn paragraph_to_node(block: &str) -> Result<Option<Node>, MarkdownError> {
    let text = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        return Ok(None);
    }
    Node::branch("p", inline_children(&text)?).map(Some)
}

/// Fenced code → `<pre><code>`, dedented, no inline parsing.
pub fn code_to_node(block: &str) -> Result<Node, MarkdownError> {
    let body = CodeFence::body(block);
    let code = Node::leaf("code", CodeFence::dedent(&body))?;
    Node::branch("pre", vec![code])
}

/// `> ` lines joined with single spaces → `<blockquote>`.
pub fn quote_to_node(block: &str) -> Result<Option<Node>, MarkdownError> {
    let text = block
        .lines()
        .map(BlockQuote::strip_prefix)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        return Ok(None);
    }
    Node::branch("blockquote", inline_children(&text)?).map(Some)
}

/// `* item` / `- item` lines → `<ul><li>`.
pub fn unordered_list_to_node(block: &str) -> Result<Node, MarkdownError> {
    let items = block
        .lines()
        .filter_map(UnorderedList::strip_marker)
        .map(list_item)
        .collect::<Result<Vec<_>, _>>()?;
    Node::branch("ul", items)
}

/// `1. item` lines → `<ol><li>`.
pub fn ordered_list_to_node(block: &str) -> Result<Node, MarkdownError> {
    let items = block
        .lines()
        .filter_map(OrderedList::parse_item)
        .map(|(_, text)| list_item(text))
        .collect::<Result<Vec<_>, _>>()?;
    Node::branch("ol", items)
}

fn list_item(text: &str) -> Result<Node, MarkdownError> {
    Node::branch("li", inline_children(text)?)
}

/// Inline children of `text`. Text made only of delimiters (e.g. `****`)
/// tokenizes to nothing and is kept as a raw leaf instead.
fn inline_children(text: &str) -> Result<Vec<Node>, MarkdownError> {
    let children = text_to_children(text)?;
    if children.is_empty() && !text.is_empty() {
        return Ok(vec![Node::leaf("", text)?]);
    }
    Ok(children)
}

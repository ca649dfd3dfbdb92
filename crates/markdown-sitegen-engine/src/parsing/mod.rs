pub mod blocks;
pub mod convert;
pub mod inline;
pub mod title;

use crate::error::MarkdownError;

pub use convert::{block_to_node, markdown_to_node};
pub use title::extract_title;

/// Parses `markdown` and serializes the resulting `<div>` tree.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_node(markdown).map(|node| node.to_html())
}

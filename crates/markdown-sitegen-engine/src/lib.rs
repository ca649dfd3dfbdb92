pub mod error;
pub mod node;
pub mod parsing;
pub mod site;


// Re-export key types for easier usage
pub use error::MarkdownError;
pub use node::{Attributes, Node};
pub use parsing::{extract_title, markdown_to_html, markdown_to_node};
pub use site::*;

/// Errors raised while turning markdown into a node tree.
///
/// Every variant is terminal for the current call: the parser never recovers
/// or produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid markdown: unclosed delimiter `{delimiter}`")]
    UnbalancedDelimiter { delimiter: &'static str },
    #[error("Invalid heading level: {level}")]
    InvalidHeading { level: usize },
    #[error("Invalid node: {0}")]
    InvalidNode(String),
    #[error("Document has no content blocks")]
    EmptyDocument,
    #[error("Validation error: all pages need a single h1 header")]
    MissingTitle,
}

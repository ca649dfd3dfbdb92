use crate::{
    error::MarkdownError,
    node::{Attributes, Node},
};

/// Classification of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A classified span of text within a block.
///
/// `target` is only ever set for [`InlineKind::Link`] and [`InlineKind::Image`];
/// the constructors are the only way to build a token, so plain tokens never
/// carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineToken {
    content: String,
    kind: InlineKind,
    target: Option<String>,
}

impl InlineToken {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: InlineKind::Plain,
            target: None,
        }
    }

    /// A delimiter-marked span (bold, italic or code).
    pub fn marked(kind: InlineKind, content: impl Into<String>) -> Self {
        debug_assert!(matches!(
            kind,
            InlineKind::Bold | InlineKind::Italic | InlineKind::Code
        ));
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            content: label.into(),
            kind: InlineKind::Link,
            target: Some(href.into()),
        }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: InlineKind::Image,
            target: Some(src.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> InlineKind {
        self.kind
    }

    /// Destination URL; empty for anything but links and images.
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or_default()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == InlineKind::Plain
    }

    /// Converts the token into its HTML leaf.
    ///
    /// | kind   | tag    | attributes          |
    /// |--------|--------|---------------------|
    /// | plain  | (none) |                     |
    /// | bold   | `b`    |                     |
    /// | italic | `i`    |                     |
    /// | code   | `code` |                     |
    /// | link   | `a`    | `href`              |
    /// | image  | `img`  | `src`, `alt`        |
    pub fn to_node(&self) -> Result<Node, MarkdownError> {
        match self.kind {
            InlineKind::Plain => Node::leaf("", self.content.as_str()),
            InlineKind::Bold => Node::leaf("b", self.content.as_str()),
            InlineKind::Italic => Node::leaf("i", self.content.as_str()),
            InlineKind::Code => Node::leaf("code", self.content.as_str()),
            InlineKind::Link => Node::leaf_with_attributes(
                "a",
                self.content.as_str(),
                Attributes::new().with("href", self.target()),
            ),
            InlineKind::Image => Node::leaf_with_attributes(
                "img",
                "",
                Attributes::new()
                    .with("src", self.target())
                    .with("alt", self.content.as_str()),
            ),
        }
    }
}

//! # HTML Node Tree
//!
//! The output contract of the parser: a small tagged tree that renders itself
//! to markup.
//!
//! - A **leaf** holds literal text. An empty tag means "no element", the text
//!   is emitted as-is.
//! - A **branch** holds one or more children and never text of its own.
//!
//! Nodes are validated on construction and immutable afterwards, so every
//! `Node` in existence satisfies those invariants.

pub mod attributes;

pub use attributes::Attributes;

use crate::error::MarkdownError;

/// Elements that may legitimately be leaves with no text content.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Returns true if `tag` names a void (self-closing) element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// One markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        tag: String,
        text: String,
        attributes: Attributes,
    },
    Branch {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// Creates a leaf with no attributes.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Result<Self, MarkdownError> {
        Self::leaf_with_attributes(tag, text, Attributes::new())
    }

    /// Creates a leaf.
    ///
    /// Fails with [`MarkdownError::InvalidNode`] if `text` is empty and `tag`
    /// is not a void element.
    pub fn leaf_with_attributes(
        tag: impl Into<String>,
        text: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, MarkdownError> {
        let tag = tag.into();
        let text = text.into();
        if text.is_empty() && !is_void_element(&tag) {
            return Err(MarkdownError::InvalidNode(format!(
                "leaf <{tag}> requires a value"
            )));
        }
        Ok(Node::Leaf {
            tag,
            text,
            attributes,
        })
    }

    /// Creates a branch with no attributes.
    pub fn branch(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, MarkdownError> {
        Self::branch_with_attributes(tag, children, Attributes::new())
    }

    /// Creates a branch.
    ///
    /// Fails with [`MarkdownError::InvalidNode`] if `tag` is empty or
    /// `children` is empty.
    pub fn branch_with_attributes(
        tag: impl Into<String>,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Result<Self, MarkdownError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(MarkdownError::InvalidNode(
                "branch requires a tag".to_string(),
            ));
        }
        if children.is_empty() {
            return Err(MarkdownError::InvalidNode(format!(
                "branch <{tag}> requires children"
            )));
        }
        Ok(Node::Branch {
            tag,
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        match self {
            Node::Leaf { tag, .. } | Node::Branch { tag, .. } => tag,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Branch { attributes, .. } => attributes,
        }
    }

    /// Leaf text, or `None` for a branch.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Leaf { text, .. } => Some(text),
            Node::Branch { .. } => None,
        }
    }

    /// Child nodes; empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Branch { children, .. } => children,
        }
    }

    /// Serializes the tree depth-first with no whitespace between children.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Leaf { tag, text, .. } if tag.is_empty() => out.push_str(text),
            Node::Leaf {
                tag,
                text,
                attributes,
            } => {
                out.push_str(&format!("<{tag}{}>", attributes.to_html()));
                if text.is_empty() && is_void_element(tag) {
                    return;
                }
                out.push_str(text);
                out.push_str(&format!("</{tag}>"));
            }
            Node::Branch {
                tag,
                children,
                attributes,
            } => {
                out.push_str(&format!("<{tag}{}>", attributes.to_html()));
                for child in children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
    }
}

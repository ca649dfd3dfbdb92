//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Image`**: `![label](target)` pattern
//! - **`Link`**: `[label](target)` pattern
//! - **`Bold`**: `DELIM = "**"`
//! - **`Italic`**: `STAR = "*"`, `UNDERSCORE = "_"`
//! - **`CodeSpan`**: `TICK = "`"`
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use image::Image;
pub use link::Link;

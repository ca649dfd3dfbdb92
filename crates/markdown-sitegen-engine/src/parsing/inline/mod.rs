//! # Inline Parsing
//!
//! Turns the text of a single block into a flat sequence of [`InlineToken`]s.
//!
//! ## Passes
//!
//! Tokenizing runs as ordered passes. Each pass only rewrites tokens that are
//! still plain; anything an earlier pass classified flows through untouched.
//!
//! 1. Images `![alt](src)`
//! 2. Links `[label](href)`
//! 3. Bold `**`
//! 4. Italic `*`, then `_`
//! 5. Code spans `` ` ``
//!
//! Images run before links so the link pattern never splits image markup.
//! Code spans run last, so they are *not* raw zones: `` `a**b**` `` has its
//! bold markers consumed before the code pass sees it.
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken` and `InlineKind`, plus the token→node mapping
//! - **`kinds`**: Inline-specific delimiters and patterns (Image, Link, Bold, Italic, CodeSpan)
//! - **`parser`**: `tokenize_inline()` entry point and the individual passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{text_to_children, tokenize_inline};
pub use types::{InlineKind, InlineToken};

//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`split`): The document is cut into blocks at blank
//!    lines. Fenced code is a raw zone, blank lines inside it do not split.
//!
//! 2. **Classification** (`classify`): Each block is tagged with a
//!    `BlockKind`; first match wins in the order heading, code, quote,
//!    unordered list, ordered list, paragraph.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists)
//! - **`split`**: `split_into_blocks`
//! - **`classify`**: `classify_block`

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify_block;
pub use split::split_into_blocks;
pub use types::BlockKind;

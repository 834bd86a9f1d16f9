//! blockmark-core - content blocks, escaping and Markdown rendering
//!
//! This crate turns typed content blocks into Markdown fragments. It is used
//! by `blockmark`, which adds record validation, document assembly and HTML
//! output on top.
//!
//! # Architecture
//!
//! ```text
//!                       ┌─────────────┐
//! ContentBlock ───────▶ │ BlockRender │ ──▶ Markdown fragment
//!                       └──────┬──────┘
//!                              │ Text / List
//!                       ┌──────▼──────┐
//!                       │ TextEscaper │
//!                       └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockmark_core::{render_block, ContentBlock, Options};
//!
//! let options = Options::default();
//! let title = render_block(&ContentBlock::title("Hello World"), &options).unwrap();
//! assert_eq!(title, "# Hello World\n\n");
//!
//! let text = render_block(&ContentBlock::text("2 * 3"), &options).unwrap();
//! assert_eq!(text, "2 \\* 3\n\n");
//! ```

mod block;
mod escape;
mod options;
mod render;

pub use block::{ContentBlock, ContentType};
pub use escape::{escape_rules, escape_text, EscapeRule, Replacement, TextEscaper, INVISIBLE_MARKER};
pub use options::Options;
pub use render::{render, render_block, BlockRenderer, RenderError, BLOCK_SEPARATOR, HARD_LINE_BREAK};

//! # blockmark
//!
//! Convert a flat list of typed content records into Markdown, and optionally
//! into HTML with stable heading ids.
//!
//! ## Design
//!
//! Input is an ordered array of records shaped `{"type": ..., "content": ...}`.
//! Each record is validated, rendered to a Markdown fragment by
//! [`blockmark_core`], and the fragments are concatenated in input order.
//! Any malformed record aborts the whole conversion.
//!
//! - **Text** and **List** content is escaped so it cannot be read as Markdown
//! - **Title** and **Image** content is trusted and emitted verbatim
//! - HTML output gets `id="header0"`, `id="header1"`, ... on top-level headings
//!
//! ## Example (Markdown)
//!
//! ```rust
//! use blockmark::{parse_records, Converter};
//!
//! let records = parse_records(r#"[
//!     {"type": "Title", "content": "Hello"},
//!     {"type": "List", "content": "one\n\ntwo"}
//! ]"#).unwrap();
//!
//! let markdown = Converter::new().to_markdown(&records).unwrap();
//! assert!(markdown.starts_with("# Hello\n\n- one"));
//! ```
//!
//! ## Example (HTML)
//!
//! ```rust
//! use blockmark::{parse_records, Converter};
//!
//! let records = parse_records(r#"[{"type": "Title", "content": "Hello"}]"#).unwrap();
//! let html = Converter::new().to_html(&records).unwrap();
//! assert_eq!(html, "<h1 id=\"header0\">Hello</h1>\n");
//! ```

pub mod heading;
#[cfg(feature = "html")]
pub mod html;
mod service;
pub mod validate;

pub use blockmark_core::{
    escape_text, render, render_block, BlockRenderer, ContentBlock, ContentType, Options,
    RenderError, TextEscaper,
};
pub use heading::{inject_heading_ids, HeadingIds};
#[cfg(feature = "html")]
pub use html::markdown_to_html;
pub use service::{parse_records, Converter, OutputFormat};
pub use validate::{validate, validate_record, Record, ValidationError};

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid record #{index}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("cannot render record #{index}")]
    Render {
        index: usize,
        #[source]
        source: RenderError,
    },

    #[error("invalid input")]
    Json(#[from] serde_json::Error),

    #[error("HTML output needs the `html` feature")]
    HtmlUnavailable,
}

pub type Result<T> = std::result::Result<T, ConvertError>;

//! Markdown to HTML rendering.
//!
//! This module wraps `pulldown-cmark` as the default Markdown renderer used by
//! [`Converter::to_html`](crate::Converter::to_html). Any other renderer can be
//! plugged in through [`Converter::to_html_with`](crate::Converter::to_html_with).

use pulldown_cmark::{html, Options, Parser};

/// Render Markdown to HTML with plain CommonMark rules.
///
/// # Example
///
/// ```rust
/// use blockmark::markdown_to_html;
///
/// let html = markdown_to_html("# Hello\n\nWorld\n");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

//! Block rendering
//!
//! Converts a single content block into a Markdown fragment. Every fragment
//! ends with one blank-line separator so fragments can be concatenated
//! directly.

use crate::block::{ContentBlock, ContentType};
use crate::escape::TextEscaper;
use crate::options::Options;

/// Separator between Markdown blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Two trailing spaces before the newline make a hard line break
pub const HARD_LINE_BREAK: &str = "  \n";

/// Error raised while rendering a block
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unknown content type `{found}`, expected one of: {}", ContentType::NAMES.join(", "))]
    UnknownContentType { found: String },
}

/// Render a block given its raw type and content
pub fn render(kind: &str, content: &str, options: &Options) -> Result<String, RenderError> {
    let content_type: ContentType = kind.parse()?;
    Ok(render_typed(content_type, content, options, &TextEscaper::new(options)))
}

/// Render a single content block
pub fn render_block(block: &ContentBlock, options: &Options) -> Result<String, RenderError> {
    render(&block.kind, &block.content, options)
}

/// Renders blocks with one escaping pipeline shared across calls
#[derive(Debug, Clone)]
pub struct BlockRenderer<'a> {
    options: &'a Options,
    escaper: TextEscaper,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            escaper: TextEscaper::new(options),
        }
    }

    pub fn render(&self, kind: &str, content: &str) -> Result<String, RenderError> {
        let content_type: ContentType = kind.parse()?;
        Ok(render_typed(content_type, content, self.options, &self.escaper))
    }

    pub fn render_block(&self, block: &ContentBlock) -> Result<String, RenderError> {
        self.render(&block.kind, &block.content)
    }
}

fn render_typed(
    content_type: ContentType,
    content: &str,
    options: &Options,
    escaper: &TextEscaper,
) -> String {
    let mut out = match content_type {
        ContentType::Title => format!("# {}", content),
        ContentType::Text => escape_prose(content, escaper),
        ContentType::List => render_list(content, options, escaper),
        ContentType::Image => format!("![]({})", content),
    };
    out.push_str(BLOCK_SEPARATOR);
    out
}

/// Escape text and turn each newline into a hard line break
fn escape_prose(text: &str, escaper: &TextEscaper) -> String {
    escaper.escape(text).replace('\n', HARD_LINE_BREAK)
}

fn render_list(content: &str, options: &Options, escaper: &TextEscaper) -> String {
    let items: Vec<String> = content
        .split(BLOCK_SEPARATOR)
        .filter(|item| !item.is_empty())
        .map(|item| format!("{} {}", options.bullet_list_marker, escape_prose(item, escaper)))
        .collect();

    // The list carries its own trailing separator on top of the one every
    // fragment gets, so a list is followed by two blank lines.
    let mut out = items.join(BLOCK_SEPARATOR);
    out.push_str(BLOCK_SEPARATOR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::INVISIBLE_MARKER;
    use pretty_assertions::assert_eq;

    fn default_options() -> Options {
        Options::default()
    }

    #[test]
    fn test_title_is_not_escaped() {
        let result = render("Title", "a*b", &default_options()).unwrap();
        assert_eq!(result, "# a*b\n\n");
    }

    #[test]
    fn test_image_is_not_escaped() {
        let result = render("Image", "http://x.org/a_(1).png", &default_options()).unwrap();
        assert_eq!(result, "![](http://x.org/a_(1).png)\n\n");
    }

    #[test]
    fn test_text() {
        let result = render("Text", "Hello World", &default_options()).unwrap();
        assert_eq!(result, "Hello World\n\n");
    }

    #[test]
    fn test_text_is_escaped() {
        let result = render("Text", "a*b - c", &default_options()).unwrap();
        assert_eq!(result, "a\\*b \\- c\n\n");
    }

    #[test]
    fn test_text_line_breaks() {
        let result = render("Text", "one\ntwo\nthree", &default_options()).unwrap();
        assert_eq!(result, "one  \ntwo  \nthree\n\n");
    }

    #[test]
    fn test_text_ordered_list_marker() {
        let result = render("Text", "1. not a list", &default_options()).unwrap();
        assert_eq!(result, format!("{}1. not a list\n\n", INVISIBLE_MARKER));
    }

    #[test]
    fn test_list() {
        let result = render("List", "first\n\nsecond", &default_options()).unwrap();
        // Two separators after the last item: the list's own and the fragment's.
        assert_eq!(result, "- first\n\n- second\n\n\n\n");
    }

    #[test]
    fn test_list_drops_empty_items() {
        let result = render("List", "\n\nonly\n\n\n\n", &default_options()).unwrap();
        assert_eq!(result, "- only\n\n\n\n");
    }

    #[test]
    fn test_list_items_are_escaped() {
        let result = render("List", "a+b\nc\n\n<tag>", &default_options()).unwrap();
        assert_eq!(result, "- a\\+b  \nc\n\n- &lt;tag>\n\n\n\n");
    }

    #[test]
    fn test_empty_list() {
        let result = render("List", "", &default_options()).unwrap();
        assert_eq!(result, "\n\n\n\n");
    }

    #[test]
    fn test_list_marker_option() {
        let options = Options {
            bullet_list_marker: '*',
            ..Default::default()
        };
        let result = render("List", "x", &options).unwrap();
        assert_eq!(result, "* x\n\n\n\n");
    }

    #[test]
    fn test_unknown_type() {
        let err = render("Bogus", "x", &default_options()).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownContentType {
                found: "Bogus".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown content type `Bogus`, expected one of: Text, Title, List, Image"
        );
    }

    #[test]
    fn test_renderer_matches_free_function() {
        let options = default_options();
        let renderer = BlockRenderer::new(&options);
        let block = ContentBlock::list("a\n\nb");
        assert_eq!(
            renderer.render_block(&block).unwrap(),
            render_block(&block, &options).unwrap()
        );
    }
}

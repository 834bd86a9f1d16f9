//! Content block model
//!
//! A document is a flat, ordered list of [`ContentBlock`]s. Each block carries
//! the raw `type` string it was read with; resolving it to a [`ContentType`]
//! happens at render time, so a well-shaped block with an unknown type is a
//! render error rather than a validation error.

use std::fmt;
use std::str::FromStr;

use crate::render::RenderError;

/// The closed set of content kinds a block can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Freeform prose, escaped before emission
    Text,
    /// Top-level heading, emitted verbatim
    Title,
    /// Bullet list, items separated by a blank line
    List,
    /// Image URL, emitted verbatim
    Image,
}

impl ContentType {
    /// Every content type, in declaration order
    pub const ALL: [ContentType; 4] = [
        ContentType::Text,
        ContentType::Title,
        ContentType::List,
        ContentType::Image,
    ];

    /// Wire names accepted in a record's `type` field, same order as [`ContentType::ALL`]
    pub const NAMES: [&'static str; 4] = ["Text", "Title", "List", "Image"];

    /// The wire name of this content type
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Text => "Text",
            ContentType::Title => "Title",
            ContentType::List => "List",
            ContentType::Image => "Image",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RenderError::UnknownContentType {
                found: s.to_string(),
            })
    }
}

/// One unit of source content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Raw `type` value; not guaranteed to name a [`ContentType`]
    pub kind: String,
    /// Raw `content` value
    pub content: String,
}

impl ContentBlock {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ContentType::Text.as_str(), content)
    }

    pub fn title(content: impl Into<String>) -> Self {
        Self::new(ContentType::Title.as_str(), content)
    }

    pub fn list(content: impl Into<String>) -> Self {
        Self::new(ContentType::List.as_str(), content)
    }

    pub fn image(content: impl Into<String>) -> Self {
        Self::new(ContentType::Image.as_str(), content)
    }

    /// Resolve the raw kind against the content type table
    pub fn content_type(&self) -> Result<ContentType, RenderError> {
        self.kind.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_as_str() {
        for (kind, name) in ContentType::ALL.iter().zip(ContentType::NAMES) {
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn test_parse_known_types() {
        assert_eq!("Text".parse::<ContentType>().unwrap(), ContentType::Text);
        assert_eq!("Title".parse::<ContentType>().unwrap(), ContentType::Title);
        assert_eq!("List".parse::<ContentType>().unwrap(), ContentType::List);
        assert_eq!("Image".parse::<ContentType>().unwrap(), ContentType::Image);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "image".parse::<ContentType>().unwrap_err();
        assert!(matches!(err, RenderError::UnknownContentType { ref found } if found == "image"));
    }

    #[test]
    fn test_block_helpers() {
        assert_eq!(ContentBlock::title("Hi"), ContentBlock::new("Title", "Hi"));
        assert_eq!(
            ContentBlock::image("a.png").content_type().unwrap(),
            ContentType::Image
        );
        assert!(ContentBlock::new("Bogus", "x").content_type().is_err());
    }
}

//! Configuration options for Markdown rendering

/// Options for Markdown rendering and HTML post-processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Replace `{ } [ ] ( )` in escaped text with numeric character references
    pub escape_brackets: bool,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Prefix for ids injected into top-level headings
    pub heading_id_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_brackets: true,
            bullet_list_marker: '-',
            heading_id_prefix: "header".to_string(),
        }
    }
}

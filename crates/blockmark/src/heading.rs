//! Sequential ids for top-level headings.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The literal opening tag of a top-level heading, without attributes
static H1_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h1>").unwrap());

/// Yields `{prefix}0`, `{prefix}1`, ... without end.
///
/// One generator belongs to exactly one document conversion.
#[derive(Debug, Clone)]
pub struct HeadingIds {
    prefix: String,
    next: usize,
}

impl HeadingIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> usize {
        self.next
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl Iterator for HeadingIds {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_id())
    }
}

/// Give every `<h1>` in `html` an `id`, numbered in document order from 0
pub fn inject_heading_ids(html: &str, prefix: &str) -> String {
    let mut ids = HeadingIds::new(prefix);
    let result = H1_OPEN
        .replace_all(html, |_: &Captures| format!("<h1 id=\"{}\">", ids.next_id()))
        .into_owned();
    log::debug!("injected {} heading ids", ids.issued());
    result
}

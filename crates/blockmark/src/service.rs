//! Converter - the main entry point for record to Markdown/HTML conversion.

use blockmark_core::{BlockRenderer, ContentBlock, Options};

use crate::heading::inject_heading_ids;
use crate::validate::{validate_record, Record};
use crate::{ConvertError, Result};

/// Output format of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Assembled Markdown text
    #[default]
    Markdown,
    /// Markdown rendered to HTML, with heading ids
    Html,
}

impl OutputFormat {
    /// File extensions accepted for output, in the order they are listed to users
    pub const EXTENSIONS: [&'static str; 2] = ["md", "html"];

    /// Pick the format for a destination file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "md" => Some(OutputFormat::Markdown),
            "html" => Some(OutputFormat::Html),
            _ => None,
        }
    }
}

/// Parse a JSON array of records
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

/// The main service for converting content records
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Validate and render every record, in order, into one Markdown document.
    ///
    /// The first malformed record aborts the conversion; nothing is returned
    /// for the records before it.
    pub fn to_markdown(&self, records: &[Record]) -> Result<String> {
        let renderer = BlockRenderer::new(&self.options);
        let mut output = String::new();

        for (index, record) in records.iter().enumerate() {
            let block = validate_record(record)
                .map_err(|source| ConvertError::Validation { index, source })?;
            let fragment = renderer
                .render_block(&block)
                .map_err(|source| ConvertError::Render { index, source })?;
            log::debug!("record {index}: rendered {} as {} bytes", block.kind, fragment.len());
            output.push_str(&fragment);
        }

        Ok(output)
    }

    /// Render already validated blocks into one Markdown document
    pub fn render_blocks(&self, blocks: &[ContentBlock]) -> Result<String> {
        let renderer = BlockRenderer::new(&self.options);
        let mut output = String::new();

        for (index, block) in blocks.iter().enumerate() {
            let fragment = renderer
                .render_block(block)
                .map_err(|source| ConvertError::Render { index, source })?;
            log::debug!("block {index}: rendered {} as {} bytes", block.kind, fragment.len());
            output.push_str(&fragment);
        }

        Ok(output)
    }

    /// Convert records to HTML using the given Markdown renderer
    pub fn to_html_with<F>(&self, records: &[Record], render: F) -> Result<String>
    where
        F: FnOnce(&str) -> String,
    {
        let markdown = self.to_markdown(records)?;
        let html = render(&markdown);
        Ok(inject_heading_ids(&html, &self.options.heading_id_prefix))
    }

    /// Convert records to HTML with the built-in Markdown renderer
    #[cfg(feature = "html")]
    pub fn to_html(&self, records: &[Record]) -> Result<String> {
        self.to_html_with(records, crate::html::markdown_to_html)
    }

    /// Convert records to the requested format.
    ///
    /// Without the `html` feature, [`OutputFormat::Html`] fails with
    /// [`ConvertError::HtmlUnavailable`]; use [`Converter::to_html_with`] instead.
    pub fn convert(&self, records: &[Record], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Markdown => self.to_markdown(records),
            #[cfg(feature = "html")]
            OutputFormat::Html => self.to_html(records),
            #[cfg(not(feature = "html"))]
            OutputFormat::Html => Err(ConvertError::HtmlUnavailable),
        }
    }
}

//! Converter - the main entry point for Markdown to HTML conversion.

use mdhtml_core::Node;
use tracing::debug;

use crate::convert::convert;
use crate::options::Options;
use crate::Result;

/// Converts Markdown documents with a fixed set of options
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

    /// Convert Markdown to the root `div` node
    pub fn to_node(&self, markdown: &str) -> Result<Node> {
        convert(markdown, &self.options)
    }

    /// Convert Markdown to an HTML string
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        let html = self.to_node(markdown)?.to_html()?;
        debug!(input = markdown.len(), output = html.len(), "converted document");
        Ok(html)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

/// Convert Markdown to the root `div` node with default options
pub fn markdown_to_html_node(markdown: &str) -> Result<Node> {
    Converter::new().to_node(markdown)
}

/// Convert Markdown to an HTML string with default options
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Converter::new().to_html(markdown)
}

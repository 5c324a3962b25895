//! # mdhtml
//!
//! Convert Markdown to an HTML node tree and HTML string.
//!
//! ## Design
//!
//! Conversion is a two-stage pipeline:
//!
//! - **Blocks**: the document is split on blank lines and each block is
//!   classified (heading, paragraph, list, quote, code).
//! - **Inlines**: the text of each block is tokenized into spans (plain,
//!   bold, italic, code, link, image) that become the leaves of the tree.
//!
//! The result is a `div` node from `mdhtml-core`, serialized with
//! [`mdhtml_core::serialize`]. The supported grammar is deliberately small;
//! this is not a CommonMark implementation. Text is never HTML-escaped.
//!
//! ## Example
//!
//! ```rust
//! use mdhtml::markdown_to_html;
//!
//! let html = markdown_to_html("# Hi\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hi</h1><p>Some <b>bold</b> text</p></div>");
//! ```
//!
//! ## Example (options)
//!
//! ```rust
//! use mdhtml::{Converter, LineSpans, Options};
//!
//! let converter = Converter::with_options(Options {
//!     line_spans: LineSpans::Preserve,
//! });
//! let html = converter.to_html("- **first** item").unwrap();
//! assert_eq!(html, "<div><ul><li><b>first</b> item</li></ul></div>");
//! ```

pub mod block;
mod convert;
pub mod inline;
mod options;
mod service;
mod span;

pub use block::{classify, split_blocks, BlockKind};
pub use convert::{block_to_node, span_to_leaf};
pub use inline::{tokenize, Delimiter};
pub use mdhtml_core::{serialize, HtmlError, LeafNode, Node, ParentNode, Tag};
pub use options::{LineSpans, Options};
pub use service::{markdown_to_html, markdown_to_html_node, Converter};
pub use span::{SpanKind, TextSpan};

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("invalid delimiter: {0}")]
    InvalidDelimiter(String),

    #[error("missing closing delimiter {delimiter} in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("heading level {0} exceeds the maximum of 6")]
    HeadingLevelExceeded(usize),

    #[error("code fence split into {0} parts, expected 3")]
    MalformedCodeFence(usize),

    #[error("unknown span kind: {0}")]
    UnknownSpanKind(SpanKind),

    #[error(transparent)]
    Html(#[from] HtmlError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

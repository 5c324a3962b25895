//! Inline text spans produced by the tokenizer.

use std::fmt;

use crate::inline::Delimiter;

/// Formatting kind of a text span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
    Heading,
    Quote,
    ParagraphMarker,
    ListItemMarker,
    CodeBlockMarker,
}

impl SpanKind {
    /// Check if spans of this kind carry a url
    pub fn has_url(&self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
            SpanKind::Heading => "heading",
            SpanKind::Quote => "quote",
            SpanKind::ParagraphMarker => "paragraph",
            SpanKind::ListItemMarker => "list item",
            SpanKind::CodeBlockMarker => "code block",
        };
        f.write_str(name)
    }
}

/// One run of inline text with a single formatting kind.
///
/// Links and images are the only spans with a url; [`TextSpan::link`] and
/// [`TextSpan::image`] are the only ways to build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    url: Option<String>,
}

impl TextSpan {
    /// Create a span without a url.
    ///
    /// Returns `None` for [`SpanKind::Link`] and [`SpanKind::Image`], which
    /// need [`TextSpan::link`] or [`TextSpan::image`].
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Option<Self> {
        if kind.has_url() {
            return None;
        }
        Some(Self::without_url(content.into(), kind))
    }

    /// Create an unformatted span
    pub fn plain(content: impl Into<String>) -> Self {
        Self::without_url(content.into(), SpanKind::Plain)
    }

    /// Create a span for text enclosed by a delimiter
    pub fn delimited(content: impl Into<String>, delimiter: Delimiter) -> Self {
        Self::without_url(content.into(), delimiter.kind())
    }

    fn without_url(content: String, kind: SpanKind) -> Self {
        Self {
            content,
            kind,
            url: None,
        }
    }

    /// Create a link span
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    /// Create an image span; `alt` becomes the content
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "TextSpan({}, {}, {})", self.content, self.kind, url),
            None => write!(f, "TextSpan({}, {})", self.content, self.kind),
        }
    }
}

//! Configuration options for Markdown conversion

/// How list item and block quote lines keep their inline spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSpans {
    /// Lines are flattened to plain values: a list item keeps only the text
    /// of its first span, a quote line becomes one `<p>` per span
    #[default]
    Flatten,
    /// Every span of a line is kept with its inline formatting, inside one
    /// `<li>` or `<p>` per line
    Preserve,
}

/// Options for Markdown conversion
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Span handling for list items and quote lines
    pub line_spans: LineSpans,
}

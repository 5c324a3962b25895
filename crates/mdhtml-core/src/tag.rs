//! HTML tag names known to the serializer.

use std::fmt;

/// Every tag name a node can carry.
///
/// Which tags a [`LeafNode`](crate::LeafNode) or a
/// [`ParentNode`](crate::ParentNode) may use is decided at serialization
/// time; see [`Tag::leaf_style`] and [`Tag::is_container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    A,
    Abbr,
    Img,
    P,
    B,
    I,
    Span,
    Code,
    Q,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Li,
    Div,
    Ul,
    Ol,
    Blockquote,
    Pre,
}

/// How a leaf with a given tag is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafStyle {
    /// `<tag attrs>` with no value and no closing tag
    Void,
    /// `<tag attrs>value</tag>`
    Attributed,
    /// `<tag>value</tag>`, attributes are not written
    Plain,
}

impl Tag {
    /// Heading tag for a level between 1 and 6
    pub fn heading(level: usize) -> Option<Tag> {
        match level {
            1 => Some(Tag::H1),
            2 => Some(Tag::H2),
            3 => Some(Tag::H3),
            4 => Some(Tag::H4),
            5 => Some(Tag::H5),
            6 => Some(Tag::H6),
            _ => None,
        }
    }

    /// Lowercase tag name as written in HTML
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::A => "a",
            Tag::Abbr => "abbr",
            Tag::Img => "img",
            Tag::P => "p",
            Tag::B => "b",
            Tag::I => "i",
            Tag::Span => "span",
            Tag::Code => "code",
            Tag::Q => "q",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::Li => "li",
            Tag::Div => "div",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Blockquote => "blockquote",
            Tag::Pre => "pre",
        }
    }

    /// Serialization style for a leaf carrying this tag.
    ///
    /// Returns `None` for tags that only make sense with children.
    pub fn leaf_style(&self) -> Option<LeafStyle> {
        match self {
            Tag::Img => Some(LeafStyle::Void),
            Tag::A | Tag::Abbr => Some(LeafStyle::Attributed),
            Tag::P
            | Tag::B
            | Tag::I
            | Tag::Span
            | Tag::Code
            | Tag::Q
            | Tag::H1
            | Tag::H2
            | Tag::H3
            | Tag::H4
            | Tag::H5
            | Tag::H6
            | Tag::Li => Some(LeafStyle::Plain),
            Tag::Div | Tag::Ul | Tag::Ol | Tag::Blockquote | Tag::Pre => None,
        }
    }

    /// Check if a parent node may carry this tag
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Tag::P | Tag::Div | Tag::Span | Tag::Ul | Tag::Ol | Tag::Li | Tag::Blockquote | Tag::Pre
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

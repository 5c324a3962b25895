//! mdhtml-core - HTML node tree and serialization
//!
//! This crate provides the output data structures for Markdown conversion:
//! a tree of [`Node`]s (leaves holding text, parents holding children) and
//! the serializer that turns a tree into an HTML string. It is used by
//! `mdhtml`, which builds the tree from Markdown.
//!
//! # Architecture
//!
//! ```text
//!                          ┌───────────┐
//! Markdown ──mdhtml──────▶ │ Node tree │ ──serialize──▶ HTML String
//!                          └───────────┘
//! ```
//!
//! Text content and attribute values are written as-is. Nothing is
//! HTML-escaped; callers that feed untrusted text must escape it first.
//!
//! # Example
//!
//! ```rust
//! use mdhtml_core::{serialize, LeafNode, Node, ParentNode, Tag};
//!
//! let tree = Node::Parent(ParentNode::new(
//!     Tag::P,
//!     vec![
//!         Node::Leaf(LeafNode::text("This is ")),
//!         Node::Leaf(LeafNode::new(Tag::B, "bold")),
//!         Node::Leaf(LeafNode::text(" text.")),
//!     ],
//! ));
//!
//! let html = serialize(&tree).unwrap();
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod serialize;
mod tag;

pub use node::{Attributes, LeafNode, Node, ParentNode};
pub use serialize::serialize;
pub use tag::{LeafStyle, Tag};

/// Error type for node serialization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node has no value")]
    MissingValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node has no children")]
    MissingChildren,

    #[error("unknown or unimplemented tag: {0}")]
    UnknownTag(String),
}

pub type Result<T> = std::result::Result<T, HtmlError>;

//! HTML node tree
//!
//! A tree is built bottom-up: leaves first, then the parents that own them.
//! Each child belongs to exactly one parent.

use indexmap::IndexMap;

use crate::tag::Tag;
use crate::Result;

/// Element attributes in insertion order
pub type Attributes = IndexMap<String, String>;

/// A renderable HTML node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Node without children: raw text or a single element with a value
    Leaf(LeafNode),
    /// Element owning an ordered list of children
    Parent(ParentNode),
}

/// A node holding a literal value.
///
/// Without a tag the value is written as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<Tag>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// An element node holding ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<Tag>,
    pub children: Vec<Node>,
    pub attributes: Attributes,
}

impl LeafNode {
    /// Create a tagged leaf
    pub fn new(tag: Tag, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf written as raw text
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Set an attribute, keeping the position of an existing key
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl ParentNode {
    /// Create a parent node owning the given children
    pub fn new(tag: Tag, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag),
            children,
            attributes: Attributes::new(),
        }
    }
}

impl Node {
    /// Tag of this node, if any
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Leaf(leaf) => leaf.tag,
            Node::Parent(parent) => parent.tag,
        }
    }

    /// Child nodes (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => &parent.children,
        }
    }

    /// Serialize this node to an HTML string
    pub fn to_html(&self) -> Result<String> {
        crate::serialize(self)
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

//! HTML serialization
//!
//! Converts a node tree into a minimal HTML string: no indentation, no
//! separators between siblings, no trailing newline.

use crate::node::{Attributes, LeafNode, Node, ParentNode};
use crate::tag::LeafStyle;
use crate::{HtmlError, Result};

/// Serialize a node tree to an HTML string
pub fn serialize(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(256);
    serialize_node(node, &mut output)?;
    Ok(output)
}

fn serialize_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf(leaf) => serialize_leaf(leaf, out),
        Node::Parent(parent) => serialize_parent(parent, out),
    }
}

fn serialize_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let value = leaf.value.as_deref().ok_or(HtmlError::MissingValue)?;

    let Some(tag) = leaf.tag else {
        out.push_str(value);
        return Ok(());
    };

    let style = tag
        .leaf_style()
        .ok_or_else(|| HtmlError::UnknownTag(tag.to_string()))?;

    out.push('<');
    out.push_str(tag.as_str());
    match style {
        LeafStyle::Void => {
            push_attributes(&leaf.attributes, out);
            out.push('>');
            return Ok(());
        }
        LeafStyle::Attributed => push_attributes(&leaf.attributes, out),
        LeafStyle::Plain => {}
    }
    out.push('>');
    out.push_str(value);
    push_closing(tag.as_str(), out);
    Ok(())
}

fn serialize_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let tag = parent.tag.ok_or(HtmlError::MissingTag)?;
    if parent.children.is_empty() {
        return Err(HtmlError::MissingChildren);
    }
    if !tag.is_container() {
        return Err(HtmlError::UnknownTag(tag.to_string()));
    }

    out.push('<');
    out.push_str(tag.as_str());
    out.push('>');
    for child in &parent.children {
        serialize_node(child, out)?;
    }
    push_closing(tag.as_str(), out);
    Ok(())
}

/// Write ` key="value"` pairs; values are not escaped
fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn push_closing(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

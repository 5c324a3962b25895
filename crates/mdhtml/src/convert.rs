//! Assemble classified blocks into an HTML node tree
//!
//! Every block becomes exactly one node; the nodes of a document are the
//! children of a single `div`.

use mdhtml_core::{LeafNode, Node, ParentNode, Tag};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::block::{self, BlockKind, CODE_FENCE};
use crate::inline::tokenize;
use crate::options::{LineSpans, Options};
use crate::span::{SpanKind, TextSpan};
use crate::{MarkdownError, Result};

static UNORDERED_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[*+-]\s*").expect("unordered marker pattern is valid"));

static ORDERED_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\s*").expect("ordered marker pattern is valid"));

/// Convert a Markdown document to a `div` node holding one child per block.
///
/// `\r\n` line endings are read as `\n`.
pub fn convert(markdown: &str, options: &Options) -> Result<Node> {
    let markdown = markdown.replace("\r\n", "\n");
    let blocks = block::blocks(&markdown);
    debug!(blocks = blocks.len(), "split document into blocks");

    let children = blocks
        .into_iter()
        .map(|(kind, text)| convert_block(kind, text, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParentNode::new(Tag::Div, children).into())
}

/// Classify a single block and convert it to a node
pub fn block_to_node(block: &str, options: &Options) -> Result<Node> {
    convert_block(block::classify(block), block, options)
}

fn convert_block(kind: BlockKind, block: &str, options: &Options) -> Result<Node> {
    trace!(?kind, len = block.len(), "converting block");
    match kind {
        BlockKind::Heading => heading_to_node(block),
        BlockKind::InlineCode => inline_code_to_node(block),
        BlockKind::FencedCode => code_block_to_node(block),
        BlockKind::BlockQuote => quote_to_node(block, options),
        BlockKind::UnorderedList => list_to_node(block, &UNORDERED_MARKER_RE, Tag::Ul, options),
        BlockKind::OrderedList => list_to_node(block, &ORDERED_MARKER_RE, Tag::Ol, options),
        BlockKind::Paragraph => paragraph_to_node(block),
    }
}

/// Convert an inline span to a leaf node
pub fn span_to_leaf(span: &TextSpan) -> Result<LeafNode> {
    let content = span.content();
    let leaf = match span.kind() {
        SpanKind::Plain => LeafNode::text(content),
        SpanKind::Bold => LeafNode::new(Tag::B, content),
        SpanKind::Italic => LeafNode::new(Tag::I, content),
        SpanKind::Code => LeafNode::new(Tag::Code, content),
        SpanKind::Link => {
            LeafNode::new(Tag::A, content).with_attr("href", span.url().unwrap_or_default())
        }
        SpanKind::Image => {
            LeafNode::new(Tag::Img, content).with_attr("src", span.url().unwrap_or_default())
        }
        kind @ (SpanKind::Heading
        | SpanKind::Quote
        | SpanKind::ParagraphMarker
        | SpanKind::ListItemMarker
        | SpanKind::CodeBlockMarker) => return Err(MarkdownError::UnknownSpanKind(kind)),
    };
    Ok(leaf)
}

fn spans_to_nodes(spans: &[TextSpan]) -> Result<Vec<Node>> {
    spans
        .iter()
        .map(|span| span_to_leaf(span).map(Node::Leaf))
        .collect()
}

fn heading_to_node(block: &str) -> Result<Node> {
    let level = block.chars().take_while(|&c| c == '#').count();
    let tag = Tag::heading(level).ok_or(MarkdownError::HeadingLevelExceeded(level))?;

    // Only the raw text is rendered; tokenizing still rejects bad markup
    let text = block[level..].trim();
    tokenize(text)?;

    Ok(LeafNode::new(tag, text).into())
}

fn inline_code_to_node(block: &str) -> Result<Node> {
    let spans = tokenize(block)?;
    let code = spans.first().map(TextSpan::content).unwrap_or_default();
    Ok(LeafNode::new(Tag::Code, code).into())
}

fn code_block_to_node(block: &str) -> Result<Node> {
    let parts: Vec<&str> = block.split(CODE_FENCE).collect();
    let [_, code, _] = parts.as_slice() else {
        return Err(MarkdownError::MalformedCodeFence(parts.len()));
    };

    let code = LeafNode::new(Tag::Code, code.trim());
    Ok(ParentNode::new(Tag::Pre, vec![code.into()]).into())
}

fn quote_to_node(block: &str, options: &Options) -> Result<Node> {
    let mut children = Vec::new();

    for line in block.lines() {
        let spans = tokenize(strip_quote_marker(line))?;
        match options.line_spans {
            LineSpans::Flatten => children.extend(
                spans
                    .iter()
                    .map(|span| Node::Leaf(LeafNode::new(Tag::P, span.content()))),
            ),
            LineSpans::Preserve => {
                if !spans.is_empty() {
                    children.push(ParentNode::new(Tag::P, spans_to_nodes(&spans)?).into());
                }
            }
        }
    }

    Ok(ParentNode::new(Tag::Blockquote, children).into())
}

/// Strip one `>` and the single space after it
fn strip_quote_marker(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.strip_prefix('>').unwrap_or(line);
    line.strip_prefix(' ').unwrap_or(line)
}

fn list_to_node(block: &str, marker: &Regex, tag: Tag, options: &Options) -> Result<Node> {
    let items = block
        .lines()
        .map(|line| {
            let text = marker.replace(line.trim_start(), "");
            let spans = tokenize(&text)?;
            list_item(&spans, options)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ParentNode::new(tag, items).into())
}

fn list_item(spans: &[TextSpan], options: &Options) -> Result<Node> {
    match options.line_spans {
        LineSpans::Flatten => {
            let text = spans.first().map(TextSpan::content).unwrap_or_default();
            Ok(LeafNode::new(Tag::Li, text).into())
        }
        LineSpans::Preserve if spans.is_empty() => Ok(LeafNode::new(Tag::Li, "").into()),
        LineSpans::Preserve => Ok(ParentNode::new(Tag::Li, spans_to_nodes(spans)?).into()),
    }
}

fn paragraph_to_node(block: &str) -> Result<Node> {
    let text = block.replace('\n', " ");
    let spans = tokenize(&text)?;
    Ok(ParentNode::new(Tag::P, spans_to_nodes(&spans)?).into())
}

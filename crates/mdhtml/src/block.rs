//! Block splitting and classification.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Fence marker for code blocks
pub const CODE_FENCE: &str = "```";

static BLANK_LINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("blank line pattern is valid"));

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}").expect("heading pattern is valid"));

static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^`[^`]*`$").expect("inline code pattern is valid"));

static UNORDERED_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+*] ").expect("unordered list pattern is valid"));

static ORDERED_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\. ").expect("ordered list pattern is valid"));

/// Kind of a top-level block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    InlineCode,
    FencedCode,
    BlockQuote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into blocks separated by blank lines.
///
/// Each block is trimmed; empty blocks are dropped.
pub fn split_blocks(document: &str) -> Vec<&str> {
    BLANK_LINES_RE
        .split(document)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single block. The first matching rule wins:
///
/// 1. heading: starts with one to six `#`
/// 2. inline code: the whole block is one `` `...` `` span
/// 3. fenced code: exactly two fence markers
/// 4. block quote: starts with `>`
/// 5. unordered list: starts with `-`, `+` or `*` and a space
/// 6. ordered list: starts with digits, `.` and a space
/// 7. paragraph
pub fn classify(block: &str) -> BlockKind {
    let kind = if HEADING_RE.is_match(block) {
        BlockKind::Heading
    } else if INLINE_CODE_RE.is_match(block) {
        BlockKind::InlineCode
    } else if block.matches(CODE_FENCE).count() == 2 {
        BlockKind::FencedCode
    } else if block.starts_with('>') {
        BlockKind::BlockQuote
    } else if UNORDERED_LIST_RE.is_match(block) {
        BlockKind::UnorderedList
    } else if ORDERED_LIST_RE.is_match(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };
    trace!(?kind, "classified block");
    kind
}

/// Split a document and classify every block, in document order
pub fn blocks(document: &str) -> Vec<(BlockKind, &str)> {
    split_blocks(document)
        .into_iter()
        .map(|block| (classify(block), block))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks() {
        assert_eq!(split_blocks("A\n\nB\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_split_blocks_trims_and_drops_empty() {
        let document = "\n\n  # Heading  \n\n\n\n\nparagraph line one\nline two\n\n   \n\n- a\n- b\n";
        assert_eq!(
            split_blocks(document),
            vec!["# Heading", "paragraph line one\nline two", "- a\n- b"]
        );
    }

    #[test]
    fn test_split_empty_document() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n\n").is_empty());
    }

    #[test]
    fn test_headings() {
        assert_eq!(classify("# Title"), BlockKind::Heading);
        assert_eq!(classify("###### Six"), BlockKind::Heading);
        assert_eq!(classify("####### Seven"), BlockKind::Heading);
        assert_eq!(classify("Not # a heading"), BlockKind::Paragraph);
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(classify("`let x = 1;`"), BlockKind::InlineCode);
        assert_eq!(classify("`a` and `b`"), BlockKind::Paragraph);
    }

    #[test]
    fn test_fenced_code() {
        assert_eq!(classify("```\ncode\n```"), BlockKind::FencedCode);
        assert_eq!(classify("```\n# not a heading\n```"), BlockKind::FencedCode);
        assert_eq!(classify("```\n> not a quote\n```"), BlockKind::FencedCode);
        assert_eq!(classify("```\nunterminated"), BlockKind::Paragraph);
    }

    #[test]
    fn test_block_quote() {
        assert_eq!(classify("> quoted\n> more"), BlockKind::BlockQuote);
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(classify("- one\n- two"), BlockKind::UnorderedList);
        assert_eq!(classify("+ one"), BlockKind::UnorderedList);
        assert_eq!(classify("* one"), BlockKind::UnorderedList);
        assert_eq!(classify("-no space"), BlockKind::Paragraph);
        assert_eq!(classify("**bold** start"), BlockKind::Paragraph);
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(classify("1. one\n2. two"), BlockKind::OrderedList);
        assert_eq!(classify("10. ten"), BlockKind::OrderedList);
        assert_eq!(classify("1.no space"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_is_pure() {
        let block = "- item\n- item";
        assert_eq!(classify(block), classify(block));
    }

    #[test]
    fn test_blocks_pairs_kinds() {
        let found = blocks("# Hi\n\nSome text\n\n> quote");
        assert_eq!(
            found,
            vec![
                (BlockKind::Heading, "# Hi"),
                (BlockKind::Paragraph, "Some text"),
                (BlockKind::BlockQuote, "> quote"),
            ]
        );
    }
}

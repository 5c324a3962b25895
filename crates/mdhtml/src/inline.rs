//! Inline tokenizer
//!
//! Turns raw text into an ordered sequence of [`TextSpan`]s. Tokenizing runs
//! in fixed stages, each one only looking at the plain spans left by the
//! stages before it:
//!
//! 1. code spans (`` ` ``)
//! 2. bold (`**`)
//! 3. italic (`_`)
//! 4. images (`![alt](url)`)
//! 5. links (`[text](url)`)
//!
//! Code runs first so that `**` or `_` inside backticks stay literal.

use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::span::{SpanKind, TextSpan};
use crate::{MarkdownError, Result};

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("image pattern is valid")
});

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("link pattern is valid")
});

/// Paired inline delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `` ` ``
    Code,
    /// `**`
    Bold,
    /// `_`
    Italic,
}

impl Delimiter {
    /// Delimiters in the order the tokenizer applies them
    pub const ORDER: [Delimiter; 3] = [Delimiter::Code, Delimiter::Bold, Delimiter::Italic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Code => "`",
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
        }
    }

    /// Kind given to text enclosed by this delimiter
    pub fn kind(&self) -> SpanKind {
        match self {
            Delimiter::Code => SpanKind::Code,
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
        }
    }
}

impl FromStr for Delimiter {
    type Err = MarkdownError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "`" => Ok(Delimiter::Code),
            "**" => Ok(Delimiter::Bold),
            "_" => Ok(Delimiter::Italic),
            _ => Err(MarkdownError::InvalidDelimiter(s.to_string())),
        }
    }
}

/// Tokenize raw text into inline spans
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::plain(text)];
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }
    let spans = split_spans_image(spans);
    Ok(split_spans_link(spans))
}

/// Split plain spans on a delimiter given by its markdown text.
///
/// Fails with [`MarkdownError::InvalidDelimiter`] for anything other than
/// `` ` ``, `**` or `_`.
pub fn split_spans_delimiter(spans: Vec<TextSpan>, delimiter: &str) -> Result<Vec<TextSpan>> {
    split_delimiter(spans, delimiter.parse()?)
}

/// Split plain spans on a delimiter.
///
/// Text between pairs of delimiters becomes a span of the delimiter's kind,
/// even when empty. Text outside them stays plain; empty plain text is
/// dropped. Spans that are not plain pass through untouched.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: Delimiter) -> Result<Vec<TextSpan>> {
    let marker = delimiter.as_str();
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.content();
        if text.matches(marker).count() % 2 != 0 {
            return Err(MarkdownError::UnbalancedDelimiter {
                delimiter: marker.to_string(),
                text: text.to_string(),
            });
        }

        for (index, chunk) in text.split(marker).enumerate() {
            if index % 2 == 0 {
                push_plain(&mut result, chunk);
            } else {
                result.push(TextSpan::delimited(chunk, delimiter));
            }
        }
    }

    Ok(result)
}

/// Extract `![alt](url)` images from plain spans
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, image_matches, |alt, url| TextSpan::image(alt, url))
}

/// Extract `[text](url)` links from plain spans
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, link_matches, |text, url| TextSpan::link(text, url))
}

/// `(alt, url)` pairs of every image in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    image_matches(text).into_iter().map(InlineMatch::into_pair).collect()
}

/// `(text, url)` pairs of every link in `text`, images excluded
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    link_matches(text).into_iter().map(InlineMatch::into_pair).collect()
}

/// A link or image located in a string
struct InlineMatch<'a> {
    range: Range<usize>,
    text: &'a str,
    url: &'a str,
}

impl<'a> InlineMatch<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        Some(Self {
            range: caps.get(0)?.range(),
            text: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }

    fn into_pair(self) -> (String, String) {
        (self.text.to_string(), self.url.to_string())
    }
}

fn image_matches(text: &str) -> Vec<InlineMatch<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| InlineMatch::from_captures(&caps))
        .collect()
}

fn link_matches(text: &str) -> Vec<InlineMatch<'_>> {
    LINK_RE
        .captures_iter(text)
        .filter_map(|caps| InlineMatch::from_captures(&caps))
        // `![...](...)` is an image, never a link
        .filter(|m| !text[..m.range.start].ends_with('!'))
        .collect()
}

/// Rebuild plain spans around the matches found in them
fn split_matches<F, B>(spans: Vec<TextSpan>, find: F, build: B) -> Vec<TextSpan>
where
    F: Fn(&str) -> Vec<InlineMatch<'_>>,
    B: Fn(&str, &str) -> TextSpan,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.content();
        let mut cursor = 0;
        for m in find(text) {
            push_plain(&mut result, &text[cursor..m.range.start]);
            result.push(build(m.text, m.url));
            cursor = m.range.end;
        }
        push_plain(&mut result, &text[cursor..]);
    }

    result
}

fn push_plain(spans: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        spans.push(TextSpan::plain(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, kind: SpanKind) -> TextSpan {
        TextSpan::new(text, kind).unwrap()
    }

    #[test]
    fn test_plain_text_is_one_span() {
        let spans = tokenize("Just some words, nothing else.").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("Just some words, nothing else.")]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_bold_and_italic() {
        let spans = tokenize("This is **bold** and _italic_").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                span("bold", SpanKind::Bold),
                TextSpan::plain(" and "),
                span("italic", SpanKind::Italic),
            ]
        );
    }

    #[test]
    fn test_code_span() {
        let spans = tokenize("This is text with a `code block` word").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is text with a "),
                span("code block", SpanKind::Code),
                TextSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_code_keeps_other_delimiters() {
        let spans = tokenize("call `f(**kwargs, _x)` now").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("call "),
                span("f(**kwargs, _x)", SpanKind::Code),
                TextSpan::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        let spans = tokenize("**bold** middle _end_").unwrap();
        assert_eq!(
            spans,
            vec![
                span("bold", SpanKind::Bold),
                TextSpan::plain(" middle "),
                span("end", SpanKind::Italic),
            ]
        );
    }

    #[test]
    fn test_empty_formatted_span_is_kept() {
        let spans = tokenize("a ```` b").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("a "),
                span("", SpanKind::Code),
                span("", SpanKind::Code),
                TextSpan::plain(" b"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_delimiter() {
        let err = tokenize("This is **bold text").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::UnbalancedDelimiter {
                delimiter: "**".to_string(),
                text: "This is **bold text".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("**"));
        assert!(message.contains("This is **bold text"));
    }

    #[test]
    fn test_unbalanced_in_each_stage() {
        for text in ["a ` b", "a ** b ** c ** d", "snake_case"] {
            assert!(matches!(
                tokenize(text),
                Err(MarkdownError::UnbalancedDelimiter { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_delimiter() {
        let spans = vec![TextSpan::plain("a ~b~ c")];
        assert_eq!(
            split_spans_delimiter(spans, "~"),
            Err(MarkdownError::InvalidDelimiter("~".to_string()))
        );
    }

    #[test]
    fn test_split_single_delimiter() {
        let spans = vec![TextSpan::plain("a _b_ **c**")];
        let result = split_spans_delimiter(spans, "_").unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::plain("a "),
                span("b", SpanKind::Italic),
                TextSpan::plain(" **c**"),
            ]
        );
    }

    #[test]
    fn test_non_plain_spans_pass_through() {
        let spans = vec![span("odd ` count", SpanKind::Code), TextSpan::plain("x `y`")];
        let result = split_spans_delimiter(spans, "`").unwrap();
        assert_eq!(
            result,
            vec![
                span("odd ` count", SpanKind::Code),
                TextSpan::plain("x "),
                span("y", SpanKind::Code),
            ]
        );
    }

    #[test]
    fn test_image() {
        let spans = tokenize("![alt](http://x/y.png)").unwrap();
        assert_eq!(spans, vec![TextSpan::image("alt", "http://x/y.png")]);
    }

    #[test]
    fn test_images_between_text() {
        let spans = tokenize("An ![cat](/cat.png) and a ![dog](/dog.png).").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("An "),
                TextSpan::image("cat", "/cat.png"),
                TextSpan::plain(" and a "),
                TextSpan::image("dog", "/dog.png"),
                TextSpan::plain("."),
            ]
        );
    }

    #[test]
    fn test_link() {
        let spans = tokenize("Visit [the site](https://www.boot.dev) today").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("Visit "),
                TextSpan::link("the site", "https://www.boot.dev"),
                TextSpan::plain(" today"),
            ]
        );
    }

    #[test]
    fn test_image_and_link_together() {
        let spans = tokenize("[home](/) ![logo](/logo.png)").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::link("home", "/"),
                TextSpan::plain(" "),
                TextSpan::image("logo", "/logo.png"),
            ]
        );
    }

    #[test]
    fn test_link_text_is_not_reformatted() {
        let spans = tokenize("see **[bold link](/b)**").unwrap();
        assert_eq!(
            spans,
            vec![TextSpan::plain("see "), span("[bold link](/b)", SpanKind::Bold)]
        );
    }

    #[test]
    fn test_incomplete_link_stays_plain() {
        let spans = tokenize("[not a link] (/x) and [half](/y").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("[not a link] (/x) and [half](/y")]);
    }

    #[test]
    fn test_sentinel_like_text_is_untouched() {
        let spans = tokenize("a -*- b [c](/d) -*- e").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("a -*- b "),
                TextSpan::link("c", "/d"),
                TextSpan::plain(" -*- e"),
            ]
        );
    }

    #[test]
    fn test_extract_images() {
        let found = extract_markdown_images(
            "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)",
        );
        assert_eq!(
            found,
            vec![
                ("rick roll".to_string(), "https://i.imgur.com/aKaOqIh.gif".to_string()),
                ("obi wan".to_string(), "https://i.imgur.com/fJRm4Vk.jpeg".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_links_skips_images() {
        let found = extract_markdown_links("[to boot dev](https://www.boot.dev) ![img](/i.png)");
        assert_eq!(
            found,
            vec![("to boot dev".to_string(), "https://www.boot.dev".to_string())]
        );
    }

    #[test]
    fn test_visible_text_is_preserved() {
        let text = "Some `code`, **strong** words, an _aside_ and [a link](/l).";
        let joined: String = tokenize(text)
            .unwrap()
            .iter()
            .map(TextSpan::content)
            .collect();
        assert_eq!(joined, "Some code, strong words, an aside and a link.");
    }
}

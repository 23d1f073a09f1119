//! Inline formatter.
//!
//! Turns one element's raw text into HTML-safe markup. The passes run in a
//! fixed order:
//!
//! 1. collect and remove reference definitions (`[label]: url`)
//! 2. replace reference links (`[text][label]`) with placeholders
//! 3. replace inline links (`[text](url)`) with placeholders
//! 4. escape HTML in the remaining text
//! 5. bold, then italic
//! 6. code spans
//! 7. swap placeholders for the stashed anchors

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::error;

use crate::{ParseError, escape_html};

static REFERENCE_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\[([^\]]+)\]:\s*(.+)$").unwrap());

static REFERENCE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\[([^\]]+)\]").unwrap());

static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());
static ITALIC_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static ITALIC_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());
static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Private-use delimiter around placeholder indices. It is untouched by
/// escaping and by the emphasis patterns.
const PLACEHOLDER_MARK: char = '\u{E000}';

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}LINK(\d+)\x{E000}").unwrap());

/// Formats inline Markdown as HTML.
///
/// Supports inline and reference-style links, `**bold**`/`__bold__`,
/// `*italic*`/`_italic_` and `` `code` ``. All other text is HTML-escaped.
///
/// Never fails: on an internal fault the original text is returned unchanged.
///
/// ```rust
/// use mdtree_parser::format_inline;
///
/// assert_eq!(
///     format_inline("Visit [GitHub](https://github.com) now"),
///     r#"Visit <a href="https://github.com">GitHub</a> now"#
/// );
/// ```
pub fn format_inline(text: &str) -> String {
    match try_format_inline(text) {
        Ok(html) => html,
        Err(e) => {
            error!(
                "Error formatting inline markdown: {} (text: {:?})",
                e,
                text.chars().take(100).collect::<String>()
            );
            text.to_string()
        }
    }
}

fn try_format_inline(text: &str) -> Result<String, ParseError> {
    let mut links = LinkStash::default();

    let (text, references) = extract_reference_definitions(text);
    let text = replace_reference_links(&text, &references, &mut links);
    let text = replace_inline_links(&text, &mut links);
    let text = format_spans(&escape_html(&text));

    links.restore(&text)
}

/// Applies emphasis and code spans to already escaped text.
fn format_spans(escaped: &str) -> String {
    let text = BOLD_STARS.replace_all(escaped, "<strong>${1}</strong>");
    let text = BOLD_UNDERSCORES.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_STARS.replace_all(&text, "<em>${1}</em>");
    let text = ITALIC_UNDERSCORES.replace_all(&text, "<em>${1}</em>");
    CODE_SPAN
        .replace_all(&text, "<code>${1}</code>")
        .into_owned()
}

/// Builds an anchor whose text gets the full span formatting.
fn anchor(text: &str, url: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(url),
        format_spans(&escape_html(text))
    )
}

/// Removes `[label]: url` lines and returns them keyed by lowercase label.
fn extract_reference_definitions(text: &str) -> (String, HashMap<String, String>) {
    let mut references = HashMap::new();
    let stripped = REFERENCE_DEFINITION.replace_all(text, |caps: &Captures| {
        references.insert(caps[1].to_lowercase(), caps[2].trim().to_string());
        String::new()
    });
    (stripped.into_owned(), references)
}

fn replace_reference_links(
    text: &str,
    references: &HashMap<String, String>,
    links: &mut LinkStash,
) -> String {
    REFERENCE_LINK
        .replace_all(text, |caps: &Captures| {
            match references.get(&caps[2].to_lowercase()) {
                Some(url) => links.stash(anchor(&caps[1], url)),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Replaces `[text](url)` links, honouring nested brackets and parentheses.
///
/// A candidate that never balances is emitted as a literal `[` and the scan
/// resumes right after it, so later links in the same text are still found.
fn replace_inline_links(text: &str, links: &mut LinkStash) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let Some(offset) = text[pos..].find('[') else {
            result.push_str(&text[pos..]);
            break;
        };
        let open = pos + offset;
        result.push_str(&text[pos..open]);

        match scan_inline_link(text.as_bytes(), open) {
            Some(link) => {
                result.push_str(&links.stash(anchor(&text[link.text], &text[link.url])));
                pos = link.end;
            }
            None => {
                result.push('[');
                pos = open + 1;
            }
        }
    }

    result
}

/// Byte ranges of an inline link found at an opening bracket.
#[derive(Debug, PartialEq, Eq)]
struct InlineLink {
    text: Range<usize>,
    url: Range<usize>,
    /// Index just past the closing parenthesis.
    end: usize,
}

fn scan_inline_link(bytes: &[u8], open: usize) -> Option<InlineLink> {
    let text_close = find_balanced(bytes, open + 1, b'[', b']')?;
    if bytes.get(text_close + 1) != Some(&b'(') {
        return None;
    }
    let url_close = find_balanced(bytes, text_close + 2, b'(', b')')?;

    Some(InlineLink {
        text: open + 1..text_close,
        url: text_close + 2..url_close,
        end: url_close + 1,
    })
}

/// Finds the delimiter closing an already opened one, starting at `start`.
///
/// Delimiters are ASCII, so the returned index is always a char boundary.
fn find_balanced(bytes: &[u8], start: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 1usize;
    for (i, &byte) in bytes.iter().enumerate().skip(start) {
        if byte == open {
            depth += 1;
        } else if byte == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Rendered anchors waiting to be substituted back after escaping.
#[derive(Debug, Default)]
struct LinkStash {
    fragments: Vec<String>,
}

impl LinkStash {
    /// Stores an HTML fragment and returns its placeholder token.
    fn stash(&mut self, html: String) -> String {
        let index = self.fragments.len();
        self.fragments.push(html);
        format!("{PLACEHOLDER_MARK}LINK{index}{PLACEHOLDER_MARK}")
    }

    fn restore(&self, text: &str) -> Result<String, ParseError> {
        let mut restored = String::with_capacity(text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(text) {
            let Some(token) = caps.get(0) else {
                continue;
            };
            let fragment = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| self.fragments.get(index))
                .ok_or_else(|| {
                    ParseError::internal(format!("unresolved link placeholder {}", &caps[1]))
                })?;

            restored.push_str(&text[last..token.start()]);
            restored.push_str(fragment);
            last = token.end();
        }

        restored.push_str(&text[last..]);
        Ok(restored)
    }
}

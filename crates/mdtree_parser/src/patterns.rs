//! Line classification patterns.
//!
//! Each matcher looks at a single line. Priority between them is decided by
//! the scanner, not here.

use std::sync::LazyLock;

use regex::Regex;

static FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(```|~~~)(.*)$").unwrap());

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*+]\s+(\S.*)$").unwrap());

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+\.\s+)(\S.*)$").unwrap());

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]|\d+\.)\s").unwrap());

/// Fence family. A block opened with one family only closes with the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FenceKind {
    Backtick,
    Tilde,
}

/// An opening or closing fence line.
#[derive(Debug)]
pub(crate) struct Fence<'s> {
    pub kind: FenceKind,
    pub info: &'s str,
}

/// A header line.
#[derive(Debug)]
pub(crate) struct Header<'s> {
    pub depth: usize,
    pub text: &'s str,
}

/// A list item line.
#[derive(Debug)]
pub(crate) struct ListItem {
    pub numbered: bool,
    /// Count of leading whitespace characters.
    pub indent: usize,
    pub text: String,
}

/// Matches a fence on an already trimmed line.
pub(crate) fn fence(trimmed: &str) -> Option<Fence<'_>> {
    let caps = FENCE.captures(trimmed)?;
    let kind = if caps.get(1)?.as_str().starts_with('`') {
        FenceKind::Backtick
    } else {
        FenceKind::Tilde
    };
    Some(Fence {
        kind,
        info: caps.get(2)?.as_str().trim(),
    })
}

/// Matches an ATX header on an already trimmed line.
pub(crate) fn header(trimmed: &str) -> Option<Header<'_>> {
    let caps = HEADER.captures(trimmed)?;
    Some(Header {
        depth: caps.get(1)?.as_str().len(),
        text: caps.get(2)?.as_str(),
    })
}

/// Matches a bulleted or numbered item on the original line.
///
/// Numbered items keep their `"N. "` marker in the text.
pub(crate) fn list_item(line: &str) -> Option<ListItem> {
    if let Some(caps) = BULLET_ITEM.captures(line) {
        return Some(ListItem {
            numbered: false,
            indent: caps.get(1)?.as_str().chars().count(),
            text: caps.get(2)?.as_str().to_string(),
        });
    }

    let caps = NUMBERED_ITEM.captures(line)?;
    Some(ListItem {
        numbered: true,
        indent: caps.get(1)?.as_str().chars().count(),
        text: format!("{}{}", caps.get(2)?.as_str(), caps.get(3)?.as_str()),
    })
}

/// Returns true if the line starts with four spaces or a tab.
#[inline]
pub(crate) fn is_indented(line: &str) -> bool {
    line.starts_with("    ") || line.starts_with('\t')
}

/// Removes one level of code indentation: a tab, or four spaces.
#[inline]
pub(crate) fn strip_code_indent(line: &str) -> &str {
    line.strip_prefix('\t')
        .or_else(|| line.strip_prefix("    "))
        .unwrap_or(line)
}

/// Returns true if the line looks like a list marker followed by whitespace.
#[inline]
pub(crate) fn looks_like_list_marker(line: &str) -> bool {
    LIST_MARKER.is_match(line)
}

/// Decides whether a heavily indented list-looking line belongs to code.
///
/// Scans the indented run around `index` in both directions, skipping blank
/// lines and stopping at the first non-indented line. Any indented neighbour
/// that is not itself a list marker turns the region into code.
pub(crate) fn is_part_of_mixed_code_block(lines: &[&str], index: usize) -> bool {
    let before = lines[..index].iter().rev();
    let after = lines.iter().skip(index + 1);

    has_code_neighbour(before) || has_code_neighbour(after)
}

fn has_code_neighbour<'a>(lines: impl Iterator<Item = &'a &'a str>) -> bool {
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if !is_indented(line) {
            break;
        }
        if !looks_like_list_marker(line) {
            return true;
        }
    }
    false
}

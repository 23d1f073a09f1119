//! Markdown file detection.
//!
//! A path is Markdown when its extension is one of the known ones. Files
//! without an extension, and `.txt` files, are sniffed for Markdown syntax.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use mdtree_parser::MarkdownParser;
use regex::Regex;
use tracing::debug;

/// Number of leading lines inspected when sniffing content.
const SNIFF_LINES: usize = 50;

/// Score at which sniffed content counts as Markdown.
const MARKDOWN_THRESHOLD: u32 = 3;

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());
static LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:[-*+]|\d+\.)\s").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*\]\(.*\)").unwrap());
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*.*\*\*|__.*__|\*.*\*|_.*_").unwrap());

/// Returns true if `extension` is a known Markdown extension.
///
/// Accepts the extension with or without its leading dot, in any case.
pub fn is_markdown_extension(extension: &str) -> bool {
    let normalized = extension.strip_prefix('.').unwrap_or(extension);
    MarkdownParser::EXTENSIONS
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(normalized))
}

/// Returns true if the file at `path` should be treated as Markdown.
///
/// Unreadable files needing a content check are reported as not Markdown.
pub fn is_markdown_path(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if is_markdown_extension(ext) => true,
        None => sniff_file(path),
        Some(ext) if ext.eq_ignore_ascii_case("txt") => sniff_file(path),
        Some(_) => false,
    }
}

fn sniff_file(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(content) => has_markdown_content(&content),
        Err(e) => {
            debug!("Skipping content check for {}: {}", path.display(), e);
            false
        }
    }
}

/// Scores the first lines of `content` for Markdown syntax.
///
/// Headers and fences count double; list markers, inline links and emphasis
/// count once per line.
pub fn has_markdown_content(content: &str) -> bool {
    markdown_score(content) >= MARKDOWN_THRESHOLD
}

fn markdown_score(content: &str) -> u32 {
    content
        .split('\n')
        .take(SNIFF_LINES)
        .map(|line| line_score(line.trim()))
        .sum()
}

fn line_score(trimmed: &str) -> u32 {
    let mut score = 0;
    if HEADER.is_match(trimmed) {
        score += 2;
    }
    if LIST.is_match(trimmed) {
        score += 1;
    }
    if trimmed.starts_with("```") {
        score += 2;
    }
    if LINK.is_match(trimmed) {
        score += 1;
    }
    if EMPHASIS.is_match(trimmed) {
        score += 1;
    }
    score
}

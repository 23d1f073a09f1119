//! Structural Markdown parser.
//!
//! A single forward scan over the document's lines. Each line resolves to
//! exactly one classification, tried in this order:
//!
//! 1. fence delimiter (toggles fenced code mode)
//! 2. header, on lines without code indentation
//! 3. list item, unless its heavy indentation sits in a mixed code region
//! 4. indented code run (4 spaces or a tab, blank lines allowed inside)
//! 5. paragraph, only once a header has been seen
//!
//! Blank lines outside code are skipped.

use mdtree_ast::{Element, ElementKind};
use tracing::{debug, error};

use crate::patterns::{self, FenceKind};
use crate::{ParseError, ParseOptions, Parser};

/// Markdown structural parser.
///
/// Produces a flat sequence of leveled [`Element`]s; use
/// [`build_tree`](crate::build_tree) to nest them.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    options: ParseOptions,
}

impl MarkdownParser {
    /// File extensions recognised as Markdown.
    pub const EXTENSIONS: &'static [&'static str] = &[
        "md", "markdown", "mdown", "mkd", "mdwn", "mdtxt", "mdtext", "text",
    ];

    /// Creates a new parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a document, never failing.
    ///
    /// Internal faults are logged and yield an empty sequence rather than a
    /// partial one.
    pub fn parse_document(&self, source: &str) -> Vec<Element> {
        match self.parse(source) {
            Ok(elements) => elements,
            Err(e) => {
                error!(
                    "Error parsing markdown document: {} (source starts with {:?})",
                    e,
                    excerpt(source)
                );
                Vec::new()
            }
        }
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        Self::EXTENSIONS
    }

    fn parse(&self, source: &str) -> Result<Vec<Element>, ParseError> {
        let lines: Vec<&str> = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let elements = Scanner::new(&lines, &self.options).run()?;
        debug!(
            "Parsed {} elements from {} lines",
            elements.len(),
            lines.len()
        );
        Ok(elements)
    }
}

/// Parses `source` with `options`, never failing.
pub fn parse_document(source: &str, options: &ParseOptions) -> Vec<Element> {
    MarkdownParser::with_options(options.clone()).parse_document(source)
}

fn excerpt(source: &str) -> String {
    source.chars().take(100).collect()
}

/// Scan mode.
enum ScanState<'s> {
    Normal,
    InFence(OpenFence<'s>),
}

/// A fenced block whose closing fence has not been seen yet.
struct OpenFence<'s> {
    kind: FenceKind,
    language: String,
    start_line: u32,
    content: Vec<&'s str>,
}

struct Scanner<'s, 'o> {
    lines: &'o [&'s str],
    options: &'o ParseOptions,
    /// Level of the most recent header; 0 before the first one.
    header_level: u32,
    state: ScanState<'s>,
    elements: Vec<Element>,
}

impl<'s, 'o> Scanner<'s, 'o> {
    fn new(lines: &'o [&'s str], options: &'o ParseOptions) -> Self {
        Self {
            lines,
            options,
            header_level: 0,
            state: ScanState::Normal,
            elements: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Element>, ParseError> {
        let mut index = 0;
        while index < self.lines.len() {
            index = match self.state {
                ScanState::InFence(_) => self.fence_line(index)?,
                ScanState::Normal => self.classify(index)?,
            };
        }

        if let ScanState::InFence(fence) = self.state {
            debug!(
                "Dropping unclosed fenced block opened at line {}",
                fence.start_line
            );
        }

        Ok(self.elements)
    }

    /// Handles a line while a fence is open. Returns the next line index.
    fn fence_line(&mut self, index: usize) -> Result<usize, ParseError> {
        let line = self.lines[index];
        let open_kind = match &self.state {
            ScanState::InFence(fence) => fence.kind,
            ScanState::Normal => {
                return Err(ParseError::internal("fence line handled outside a fence"));
            }
        };

        let closes = patterns::fence(line.trim()).is_some_and(|f| f.kind == open_kind);
        if !closes {
            if let ScanState::InFence(fence) = &mut self.state {
                fence.content.push(line);
            }
            return Ok(index + 1);
        }

        let ScanState::InFence(fence) = std::mem::replace(&mut self.state, ScanState::Normal)
        else {
            return Err(ParseError::internal("fence state changed while closing"));
        };
        let level = self.section_level()?;
        let element = Element::code_block(level, fence.content.join("\n"), fence.language)
            .at_line(fence.start_line);
        self.emit(element);

        Ok(index + 1)
    }

    /// Classifies a line outside any fence. Returns the next line index.
    fn classify(&mut self, index: usize) -> Result<usize, ParseError> {
        let line = self.lines[index];
        let trimmed = line.trim();
        let line_number = line_number(index)?;

        if let Some(fence) = patterns::fence(trimmed) {
            self.state = ScanState::InFence(OpenFence {
                kind: fence.kind,
                language: fence.info.to_string(),
                start_line: line_number,
                content: Vec::new(),
            });
            return Ok(index + 1);
        }

        if trimmed.is_empty() {
            return Ok(index + 1);
        }

        let indented = patterns::is_indented(line);

        if self.options.include_headers && !indented {
            if let Some(header) = patterns::header(trimmed) {
                let level = u32::try_from(header.depth).map_err(|_| {
                    ParseError::invalid_source_at("header is too deep", line_number)
                })?;
                // The header context follows the real level even when the
                // header itself is filtered out.
                self.header_level = level;
                self.emit(Element::new(ElementKind::Header, level, header.text).at_line(line_number));
                return Ok(index + 1);
            }
        }

        if self.options.include_lists {
            if let Some(item) = patterns::list_item(line) {
                let in_code = item.indent >= 4
                    && patterns::is_part_of_mixed_code_block(self.lines, index);
                if !in_code {
                    let nesting = u32::try_from(item.indent / 2).map_err(|_| {
                        ParseError::invalid_source_at("list item is too deep", line_number)
                    })?;
                    let level = self
                        .section_level()?
                        .checked_add(nesting)
                        .ok_or_else(|| ParseError::internal("list level overflow"))?;
                    let kind = if item.numbered {
                        ElementKind::NumberedList
                    } else {
                        ElementKind::List
                    };
                    self.emit(Element::new(kind, level, item.text).at_line(line_number));
                    return Ok(index + 1);
                }
            }
        }

        if indented {
            return self.indented_block(index, line_number);
        }

        if self.options.include_paragraphs && self.header_level > 0 {
            let level = self.section_level()?;
            self.emit(Element::new(ElementKind::Paragraph, level, trimmed).at_line(line_number));
        }

        Ok(index + 1)
    }

    /// Collects an indented code run starting at `start`.
    ///
    /// The run continues over indented and blank lines. Blank lines are kept
    /// as empty lines of the block. Returns the index after the run.
    fn indented_block(&mut self, start: usize, line_number: u32) -> Result<usize, ParseError> {
        let mut content = vec![patterns::strip_code_indent(self.lines[start])];
        let mut end = start + 1;

        while let Some(line) = self.lines.get(end) {
            if patterns::is_indented(line) {
                content.push(patterns::strip_code_indent(line));
            } else if line.trim().is_empty() {
                content.push("");
            } else {
                break;
            }
            end += 1;
        }

        let level = self.section_level()?;
        self.emit(Element::code_block(level, content.join("\n"), "").at_line(line_number));
        Ok(end)
    }

    /// Level for content directly under the current header.
    fn section_level(&self) -> Result<u32, ParseError> {
        self.header_level
            .checked_add(1)
            .ok_or_else(|| ParseError::internal("header level overflow"))
    }

    fn emit(&mut self, element: Element) {
        if self.options.exceeds_depth(element.level) {
            return;
        }
        self.elements.push(element);
    }
}

fn line_number(index: usize) -> Result<u32, ParseError> {
    u32::try_from(index + 1).map_err(|_| ParseError::invalid_source("document has too many lines"))
}

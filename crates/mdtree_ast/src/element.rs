//! Element definition.
//!
//! The flat, leveled unit emitted by the structural parser.

use serde::{Deserialize, Serialize};

/// Kind of a parsed element.
///
/// The set is fixed; serialises with the kebab-case names used by the
/// renderers as CSS classes (`header`, `list`, `numbered-list`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// ATX header (`#`, `##`, ...).
    Header,
    /// Bulleted list item (`-`, `*`, `+`).
    List,
    /// Numbered list item (`1.`).
    NumberedList,
    /// Any other non-blank line inside a header section.
    Paragraph,
    /// Fenced or indented code block.
    CodeBlock,
}

impl ElementKind {
    /// Returns the serialised name of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Header => "header",
            ElementKind::List => "list",
            ElementKind::NumberedList => "numbered-list",
            ElementKind::Paragraph => "paragraph",
            ElementKind::CodeBlock => "code-block",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra data attached to code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Info string of the opening fence, trimmed. Empty for indented blocks.
    pub language: String,
}

/// A parsed element.
///
/// Elements are produced in document order and never mutated afterwards.
/// `level` is the nesting depth consumed by the tree builder; it is not
/// required to be contiguous between consecutive elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Nesting depth.
    pub level: u32,

    /// Payload with the structural marker removed.
    pub text: String,

    /// Element kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// 1-based source line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,

    /// Code block metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ElementMetadata>,
}

impl Element {
    /// Creates an element without line number or metadata.
    pub fn new(kind: ElementKind, level: u32, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            kind,
            line_number: None,
            metadata: None,
        }
    }

    /// Creates a code block element carrying its fence language.
    pub fn code_block(level: u32, text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            kind: ElementKind::CodeBlock,
            line_number: None,
            metadata: Some(ElementMetadata {
                language: language.into(),
            }),
        }
    }

    /// Sets the source line number.
    #[must_use]
    pub fn at_line(mut self, line_number: u32) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Returns the code block language, if any.
    pub fn language(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.language.as_str())
    }

    /// Splits a numbered item's stored text into its `"N."` marker and body.
    ///
    /// Numbered list items keep their marker in `text`; renderers that want
    /// to style it separately re-derive it here. Returns `None` when the text
    /// does not start with digits followed by a dot.
    pub fn numbered_prefix(&self) -> Option<(&str, &str)> {
        let digits = self
            .text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(self.text.len(), |(i, _)| i);

        if digits == 0 || !self.text[digits..].starts_with('.') {
            return None;
        }

        let marker = &self.text[..=digits];
        let body = self.text[digits + 1..].trim_start();
        Some((marker, body))
    }
}

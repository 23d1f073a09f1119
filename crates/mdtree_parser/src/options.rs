//! Parse options.

use serde::{Deserialize, Serialize};

/// Options controlling which element kinds the structural parser emits.
///
/// Disabling a kind turns its classifier off, so a matching line falls
/// through to the next classification instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Recognise `#` headers.
    pub include_headers: bool,

    /// Recognise bulleted and numbered list items.
    pub include_lists: bool,

    /// Emit paragraphs inside header sections.
    pub include_paragraphs: bool,

    /// Drop elements whose level exceeds this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_headers: true,
            include_lists: true,
            include_paragraphs: true,
            max_depth: None,
        }
    }
}

impl ParseOptions {
    /// Sets the maximum emitted level.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn without_headers(mut self) -> Self {
        self.include_headers = false;
        self
    }

    #[must_use]
    pub fn without_lists(mut self) -> Self {
        self.include_lists = false;
        self
    }

    #[must_use]
    pub fn without_paragraphs(mut self) -> Self {
        self.include_paragraphs = false;
        self
    }

    /// Returns true if an element at `level` must be dropped.
    #[inline]
    pub fn exceeds_depth(&self, level: u32) -> bool {
        self.max_depth.is_some_and(|max| level > max)
    }
}

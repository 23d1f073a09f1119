//! Parsed document pipeline.

use mdtree_ast::{Element, TreeNode};
use mdtree_parser::{ParseOptions, build_tree, parse_document};
use serde::Serialize;
use tracing::debug;

use crate::render::{TreeRenderer, render_page};
use crate::{ElementStats, ViewerConfig};

/// A document after structural parsing and tree building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Flat element sequence in document order.
    pub elements: Vec<Element>,
    /// Elements nested under the synthetic root.
    pub tree: TreeNode,
    /// Number of source lines.
    pub line_count: usize,
}

impl Document {
    /// Parses `source` and builds its tree.
    pub fn parse(source: &str, options: &ParseOptions) -> Self {
        let elements = parse_document(source, options);
        let tree = build_tree(&elements);
        let line_count = source.split('\n').count();

        debug!(
            "Parsed document: {} elements, {} lines",
            elements.len(),
            line_count
        );

        Self {
            elements,
            tree,
            line_count,
        }
    }

    /// Returns true if no element was found.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn stats(&self) -> ElementStats {
        ElementStats::collect(&self.tree)
    }

    /// Renders the tree lines, or the empty banner when there are none.
    pub fn to_html(&self, config: &ViewerConfig) -> String {
        if self.is_empty() {
            return TreeRenderer::render_empty();
        }
        TreeRenderer::new(config).render_html(&self.tree)
    }

    /// Renders a stand-alone HTML page.
    pub fn to_page(&self, config: &ViewerConfig) -> String {
        render_page(&self.to_html(config), config)
    }

    /// Renders the tree as plain text.
    pub fn to_text(&self, config: &ViewerConfig) -> String {
        TreeRenderer::new(config).render_text(&self.tree)
    }
}

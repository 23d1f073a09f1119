//! Outline statistics.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use mdtree_ast::visitor::walk_children;
use mdtree_ast::{TreeNode, VisitResult, Visitor};
use serde::Serialize;

/// Counts of each element kind in a tree, gathered by a [`Visitor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStats {
    pub headers: usize,
    pub list_items: usize,
    pub numbered_items: usize,
    pub paragraphs: usize,
    pub code_blocks: usize,
    /// Code blocks without a language (indented, or a bare fence).
    pub untagged_code_blocks: usize,
    /// Distinct code block languages, sorted.
    pub languages: BTreeSet<String>,
    /// Nesting depth of the deepest node below the root.
    pub max_depth: usize,

    #[serde(skip)]
    current_depth: usize,
}

impl ElementStats {
    /// Collects statistics for the tree under `root`.
    pub fn collect(root: &TreeNode) -> Self {
        let mut stats = Self::default();
        let _ = stats.visit_node(root);
        stats
    }

    /// Total number of elements, root excluded.
    pub fn total(&self) -> usize {
        self.headers + self.list_items + self.numbered_items + self.paragraphs + self.code_blocks
    }
}

impl Visitor for ElementStats {
    fn enter_node(&mut self, node: &TreeNode) -> VisitResult {
        if !node.is_root() {
            self.current_depth += 1;
            self.max_depth = self.max_depth.max(self.current_depth);
        }
        ControlFlow::Continue(())
    }

    fn exit_node(&mut self, node: &TreeNode) -> VisitResult {
        if !node.is_root() {
            self.current_depth -= 1;
        }
        ControlFlow::Continue(())
    }

    fn visit_header(&mut self, node: &TreeNode) -> VisitResult {
        self.headers += 1;
        walk_children(self, node)
    }

    fn visit_list_item(&mut self, node: &TreeNode) -> VisitResult {
        self.list_items += 1;
        walk_children(self, node)
    }

    fn visit_numbered_item(&mut self, node: &TreeNode) -> VisitResult {
        self.numbered_items += 1;
        walk_children(self, node)
    }

    fn visit_paragraph(&mut self, node: &TreeNode) -> VisitResult {
        self.paragraphs += 1;
        walk_children(self, node)
    }

    fn visit_code_block(&mut self, node: &TreeNode) -> VisitResult {
        self.code_blocks += 1;
        match node.element.language() {
            Some(language) if !language.is_empty() => {
                self.languages.insert(language.to_string());
            }
            _ => self.untagged_code_blocks += 1,
        }
        walk_children(self, node)
    }
}

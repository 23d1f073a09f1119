//! Walk functions for tree traversal.

use std::ops::ControlFlow;

use crate::{ElementKind, TreeNode};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate kind-specific method.
///
/// 1. Calls `enter_node` on the visitor
/// 2. Dispatches to `visit_root` or the matching `visit_*` method
/// 3. Calls `exit_node` on the visitor
pub fn walk_node<V>(visitor: &mut V, node: &TreeNode) -> VisitResult
where
    V: Visitor,
{
    visitor.enter_node(node)?;

    let result = if node.is_root() {
        visitor.visit_root(node)
    } else {
        match node.element.kind {
            ElementKind::Header => visitor.visit_header(node),
            ElementKind::List => visitor.visit_list_item(node),
            ElementKind::NumberedList => visitor.visit_numbered_item(node),
            ElementKind::Paragraph => visitor.visit_paragraph(node),
            ElementKind::CodeBlock => visitor.visit_code_block(node),
        }
    };

    result?;

    visitor.exit_node(node)
}

/// Walks all children of a node, stopping at the first `Break`.
#[inline]
pub fn walk_children<V>(visitor: &mut V, node: &TreeNode) -> VisitResult
where
    V: Visitor,
{
    for child in &node.children {
        visitor.visit_node(child)?;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Element;

    /// A simple visitor that counts nodes of each kind.
    #[derive(Default)]
    struct NodeCounter {
        root_count: usize,
        header_count: usize,
        list_count: usize,
        total_count: usize,
        exits: usize,
    }

    impl Visitor for NodeCounter {
        fn enter_node(&mut self, _node: &TreeNode) -> VisitResult {
            self.total_count += 1;
            ControlFlow::Continue(())
        }

        fn exit_node(&mut self, _node: &TreeNode) -> VisitResult {
            self.exits += 1;
            ControlFlow::Continue(())
        }

        fn visit_root(&mut self, node: &TreeNode) -> VisitResult {
            self.root_count += 1;
            walk_children(self, node)
        }

        fn visit_header(&mut self, node: &TreeNode) -> VisitResult {
            self.header_count += 1;
            walk_children(self, node)
        }

        fn visit_list_item(&mut self, node: &TreeNode) -> VisitResult {
            self.list_count += 1;
            walk_children(self, node)
        }
    }

    /// Stops at the first paragraph it sees.
    #[derive(Default)]
    struct FirstParagraph {
        found: Option<String>,
        visited: usize,
    }

    impl Visitor for FirstParagraph {
        fn enter_node(&mut self, _node: &TreeNode) -> VisitResult {
            self.visited += 1;
            ControlFlow::Continue(())
        }

        fn visit_paragraph(&mut self, node: &TreeNode) -> VisitResult {
            self.found = Some(node.element.text.clone());
            ControlFlow::Break(())
        }
    }

    fn sample_tree() -> TreeNode {
        let mut header = TreeNode::new(Element::new(ElementKind::Header, 1, "Title"));
        header
            .children
            .push(TreeNode::new(Element::new(ElementKind::Paragraph, 2, "Intro")));
        header
            .children
            .push(TreeNode::new(Element::new(ElementKind::List, 2, "Item")));

        let mut root = TreeNode::root();
        root.children.push(header);
        root.children
            .push(TreeNode::new(Element::new(ElementKind::Paragraph, 1, "Tail")));
        root
    }

    #[test]
    fn test_counts_every_node() {
        let mut counter = NodeCounter::default();
        let result = walk_node(&mut counter, &sample_tree());

        assert_eq!(result, ControlFlow::Continue(()));
        assert_eq!(counter.root_count, 1);
        assert_eq!(counter.header_count, 1);
        assert_eq!(counter.list_count, 1);
        assert_eq!(counter.total_count, 5);
        assert_eq!(counter.exits, 5);
    }

    #[test]
    fn test_early_termination() {
        let mut finder = FirstParagraph::default();
        let result = walk_node(&mut finder, &sample_tree());

        assert_eq!(result, ControlFlow::Break(()));
        assert_eq!(finder.found.as_deref(), Some("Intro"));
        // root, header, paragraph
        assert_eq!(finder.visited, 3);
    }
}

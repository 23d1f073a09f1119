//! Visitor trait for traversing element trees.
//!
//! Each `visit_*` method has a default implementation that walks children,
//! allowing you to override only the element kinds you care about.

use std::ops::ControlFlow;

use crate::TreeNode;

use super::walk::{walk_children, walk_node};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing a [`TreeNode`] without modification.
///
/// Return `ControlFlow::Break(())` from any method to stop early. Use the
/// `?` operator for convenient propagation.
pub trait Visitor: Sized {
    /// Called before visiting any node.
    #[inline]
    fn enter_node(&mut self, _node: &TreeNode) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after visiting a node and all its children.
    #[inline]
    fn exit_node(&mut self, _node: &TreeNode) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits any node by dispatching to the kind-specific method.
    #[inline]
    fn visit_node(&mut self, node: &TreeNode) -> VisitResult {
        walk_node(self, node)
    }

    /// Visit the synthetic root.
    fn visit_root(&mut self, node: &TreeNode) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a header.
    fn visit_header(&mut self, node: &TreeNode) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a bulleted list item.
    fn visit_list_item(&mut self, node: &TreeNode) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a numbered list item.
    fn visit_numbered_item(&mut self, node: &TreeNode) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a paragraph.
    fn visit_paragraph(&mut self, node: &TreeNode) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a code block.
    ///
    /// Code blocks can still own children when a later element carries a
    /// deeper level, so the default walks them too.
    fn visit_code_block(&mut self, node: &TreeNode) -> VisitResult {
        walk_children(self, node)
    }
}

//! Visitor pattern for tree traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for kind-specific visitors
//! - [`walk_children`] - Traverse all children of a node
//!
//! # Example
//!
//! ```rust
//! use mdtree_ast::{Element, ElementKind, TreeNode};
//! use mdtree_ast::visitor::{Visitor, VisitResult, walk_node};
//!
//! struct HeaderCollector {
//!     titles: Vec<String>,
//! }
//!
//! impl Visitor for HeaderCollector {
//!     fn visit_header(&mut self, node: &TreeNode) -> VisitResult {
//!         self.titles.push(node.element.text.clone());
//!         mdtree_ast::visitor::walk_children(self, node)
//!     }
//! }
//!
//! let mut root = TreeNode::root();
//! root.children.push(TreeNode::new(Element::new(ElementKind::Header, 1, "Intro")));
//!
//! let mut collector = HeaderCollector { titles: Vec::new() };
//! walk_node(&mut collector, &root);
//! assert_eq!(collector.titles, vec!["Intro"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};

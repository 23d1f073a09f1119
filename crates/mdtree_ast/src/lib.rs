//! # mdtree_ast
//!
//! Element and tree definitions for mdtree.
//!
//! This crate provides the data model shared by the parser, the tree builder
//! and the renderers:
//!
//! - [`Element`] is the flat, leveled unit produced by the structural parser
//! - [`TreeNode`] wraps an element together with its children
//! - [`visitor`] walks a finished tree without modifying it
//!
//! ## Example
//!
//! ```rust
//! use mdtree_ast::{Element, ElementKind, TreeNode};
//!
//! let header = Element::new(ElementKind::Header, 1, "Introduction");
//! let mut root = TreeNode::root();
//! root.children.push(TreeNode::new(header));
//!
//! assert_eq!(root.count_nodes(), 2);
//! ```

mod element;
mod tree;
pub mod visitor;

pub use element::{Element, ElementKind, ElementMetadata};
pub use tree::TreeNode;

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};

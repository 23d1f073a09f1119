//! TreeNode definition.

use serde::{Deserialize, Serialize};

use crate::{Element, ElementKind};

/// An element together with its ordered children.
///
/// The tree built from a document always has a synthetic root: level 0,
/// empty text, kind [`ElementKind::Header`]. The root is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The wrapped element.
    #[serde(flatten)]
    pub element: Element,

    /// Child nodes, in document order.
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Wraps an element in a node with no children.
    pub fn new(element: Element) -> Self {
        Self {
            element,
            children: Vec::new(),
        }
    }

    /// Creates the synthetic root.
    pub fn root() -> Self {
        Self::new(Element::new(ElementKind::Header, 0, ""))
    }

    /// Returns true if this node looks like the synthetic root.
    pub fn is_root(&self) -> bool {
        self.element.level == 0
            && self.element.kind == ElementKind::Header
            && self.element.text.is_empty()
            && self.element.line_number.is_none()
    }

    /// Returns true if this node has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Counts this node and all of its descendants.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::count_nodes)
            .sum::<usize>()
    }

    /// Returns the number of edges on the longest path down from this node.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

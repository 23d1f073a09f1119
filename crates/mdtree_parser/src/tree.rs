//! Level-stack tree builder.

use mdtree_ast::{Element, TreeNode};
use tracing::{debug, error};

use crate::ParseError;

/// Nests a flat element sequence under a synthetic root.
///
/// Each element becomes a child of the nearest preceding element with a
/// strictly lower level, or of the root. Level gaps are allowed. Sibling order
/// follows input order.
///
/// Never fails: if an internal fault occurs, it is logged and the tree built
/// so far is returned.
pub fn build_tree(elements: &[Element]) -> TreeNode {
    let mut builder = TreeBuilder::new();

    for element in elements {
        if let Err(e) = builder.push(element.clone()) {
            error!(
                "Error building tree structure: {} ({} elements)",
                e,
                elements.len()
            );
            return builder.finish();
        }
    }

    let root = builder.finish();
    debug!("Built tree with {} total nodes", root.count_nodes());
    root
}

/// Stack of open nodes, root first.
///
/// A node is attached to its parent when it is closed, so every finished
/// subtree is moved exactly once.
struct TreeBuilder {
    stack: Vec<TreeNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![TreeNode::root()],
        }
    }

    fn push(&mut self, element: Element) -> Result<(), ParseError> {
        // The root is never closed, so level-0 elements land under it.
        while self.stack.len() > 1 && self.top_level()? >= element.level {
            self.close()?;
        }
        self.stack.push(TreeNode::new(element));
        Ok(())
    }

    fn top_level(&self) -> Result<u32, ParseError> {
        self.stack
            .last()
            .map(|node| node.element.level)
            .ok_or_else(|| ParseError::internal("tree stack is empty"))
    }

    /// Pops the innermost open node and appends it to its parent.
    fn close(&mut self) -> Result<(), ParseError> {
        let node = self
            .stack
            .pop()
            .ok_or_else(|| ParseError::internal("tree stack is empty"))?;
        let parent = self
            .stack
            .last_mut()
            .ok_or_else(|| ParseError::internal("closed node has no open parent"))?;
        parent.children.push(node);
        Ok(())
    }

    /// Closes every open node and returns the root.
    fn finish(mut self) -> TreeNode {
        while self.stack.len() > 1 {
            if self.close().is_err() {
                break;
            }
        }
        self.stack.pop().unwrap_or_else(TreeNode::root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtree_ast::ElementKind;
    use pretty_assertions::assert_eq;

    fn el(level: u32, text: &str) -> Element {
        Element::new(ElementKind::Header, level, text)
    }

    /// Renders a tree as `text[children]` for compact assertions.
    fn shape(node: &TreeNode) -> String {
        let children: Vec<String> = node.children.iter().map(shape).collect();
        if children.is_empty() {
            node.element.text.clone()
        } else {
            format!("{}[{}]", node.element.text, children.join(","))
        }
    }

    #[test]
    fn test_siblings_and_children() {
        let tree = build_tree(&[el(1, "A"), el(2, "B"), el(2, "C"), el(1, "D")]);

        assert!(tree.is_root());
        assert_eq!(shape(&tree), "[A[B,C],D]");
    }

    #[test]
    fn test_two_headers() {
        let tree = build_tree(&[el(1, "Root"), el(2, "Child")]);

        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].children.len(), 1);
        assert_eq!(tree.children[0].children[0].element.text, "Child");
    }

    #[test]
    fn test_level_gaps_attach_to_nearest_ancestor() {
        let tree = build_tree(&[el(1, "A"), el(4, "deep"), el(2, "B"), el(3, "C")]);

        assert_eq!(shape(&tree), "[A[deep,B[C]]]");
    }

    #[test]
    fn test_descending_then_jump_back() {
        let tree = build_tree(&[el(3, "x"), el(1, "y"), el(2, "z")]);

        assert_eq!(shape(&tree), "[x,y[z]]");
    }

    #[test]
    fn test_level_zero_elements_stay_under_root() {
        let tree = build_tree(&[el(0, "a"), el(0, "b"), el(1, "c")]);

        assert_eq!(shape(&tree), "[a,b[c]]");
    }

    #[test]
    fn test_empty_input() {
        let tree = build_tree(&[]);

        assert!(tree.is_root());
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_every_element_appears_once() {
        let elements: Vec<Element> = (0..50)
            .map(|i| el(1 + (i * 7 % 5), &i.to_string()))
            .collect();
        let tree = build_tree(&elements);

        assert_eq!(tree.count_nodes(), elements.len() + 1);
    }
}

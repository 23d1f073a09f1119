//! Tree renderers.
//!
//! Both renderers walk the tree depth-first and emit one line per node. The
//! line prefix is assembled from the configured [`TreeSymbols`]: one segment
//! per ancestor (`vertical` followed by a space while that ancestor has later
//! siblings, `space` once it was the last child), then `branch` or `last` and
//! a space for the node itself.

mod html;
mod page;
mod text;

pub use page::{generate_css, render_page};

use mdtree_ast::TreeNode;

use crate::config::{TreeSymbols, ViewerConfig};

/// Renders a built tree as HTML or plain text.
///
/// The synthetic root itself is never rendered; its children are the
/// top-level lines.
pub struct TreeRenderer<'c> {
    symbols: &'c TreeSymbols,
}

/// One rendered line, handed to a concrete renderer.
struct TreeLine<'a> {
    node: &'a TreeNode,
    /// Ancestor segments plus the node's own connector.
    prefix: &'a str,
    /// Prefix shared by the node's children, used for continuation lines.
    continuation: &'a str,
}

impl<'c> TreeRenderer<'c> {
    pub fn new(config: &'c ViewerConfig) -> Self {
        Self {
            symbols: &config.tree_symbols,
        }
    }

    /// Renders the tree as a sequence of `tree-line` divs.
    pub fn render_html(&self, root: &TreeNode) -> String {
        let mut out = String::new();
        self.walk(root, "", &mut |line| html::push_line(&mut out, &line));
        out
    }

    /// Renders the tree as plain text, one node per line.
    pub fn render_text(&self, root: &TreeNode) -> String {
        let mut out = String::new();
        self.walk(root, "", &mut |line| text::push_line(&mut out, &line));
        out
    }

    /// Banner shown when a document yields no elements.
    pub fn render_empty() -> String {
        r#"<div class="empty-state">No headers, lists, or content found in this Markdown file.</div>"#
            .to_string()
    }

    /// Banner shown when a document cannot be rendered.
    pub fn render_error(message: &str) -> String {
        format!(
            r#"<div class="error-message">Error: {}</div>"#,
            mdtree_parser::escape_html(message)
        )
    }

    fn walk(&self, node: &TreeNode, prefix: &str, emit: &mut impl FnMut(TreeLine<'_>)) {
        let count = node.children.len();
        for (index, child) in node.children.iter().enumerate() {
            let is_last = index + 1 == count;
            let (connector, segment) = if is_last {
                (&self.symbols.last, self.symbols.space.clone())
            } else {
                (&self.symbols.branch, format!("{} ", self.symbols.vertical))
            };

            let line_prefix = format!("{}{} ", prefix, connector);
            let child_prefix = format!("{}{}", prefix, segment);

            emit(TreeLine {
                node: child,
                prefix: &line_prefix,
                continuation: &child_prefix,
            });
            self.walk(child, &child_prefix, emit);
        }
    }
}

//! # mdtree_parser
//!
//! Turns Markdown text into a leveled outline.
//!
//! This crate provides:
//! - [`MarkdownParser`], a line-by-line structural parser emitting a flat
//!   sequence of [`Element`](mdtree_ast::Element)s
//! - [`build_tree`], which rebuilds parent/child relationships from levels
//! - [`format_inline`], which turns one element's text into HTML-safe markup
//!
//! All three public entry points are total: internal faults are logged and
//! degrade to an empty sequence, a partial tree, or the unmodified text.
//!
//! ## Example
//!
//! ```rust
//! use mdtree_parser::{MarkdownParser, build_tree, format_inline};
//!
//! let parser = MarkdownParser::new();
//! let elements = parser.parse_document("# Title\n- **first**\n- second");
//! let tree = build_tree(&elements);
//!
//! assert_eq!(tree.children.len(), 1);
//! assert_eq!(tree.children[0].children.len(), 2);
//! assert_eq!(format_inline(&elements[1].text), "<strong>first</strong>");
//! ```

mod error;
mod escape;
mod inline;
mod markdown;
mod options;
mod patterns;
mod traits;
mod tree;

pub use error::ParseError;
pub use escape::escape_html;
pub use inline::format_inline;
pub use markdown::{MarkdownParser, parse_document};
pub use options::ParseOptions;
pub use traits::Parser;
pub use tree::build_tree;

//! Parser trait definition.

use mdtree_ast::Element;

use crate::ParseError;

/// Trait for turning source text into a flat, leveled element sequence.
///
/// # Example
///
/// ```rust
/// use mdtree_parser::{ParseError, Parser};
/// use mdtree_ast::{Element, ElementKind};
///
/// struct LineParser;
///
/// impl Parser for LineParser {
///     fn name(&self) -> &str {
///         "lines"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["txt"]
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<Element>, ParseError> {
///         Ok(source
///             .lines()
///             .map(|line| Element::new(ElementKind::Paragraph, 1, line))
///             .collect())
///     }
/// }
///
/// assert!(LineParser.can_parse("TXT"));
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["md", "markdown"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into elements in document order.
    fn parse(&self, source: &str) -> Result<Vec<Element>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

//! End-to-end tests of the parse, build and render pipeline over real
//! documents.

use std::path::PathBuf;

use mdtree_ast::{ElementKind, TreeNode};
use mdtree_core::{Document, ViewerConfig};
use mdtree_parser::{ParseOptions, build_tree, parse_document};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn parse_fixture(name: &str) -> Document {
    Document::parse(&load_fixture(name), &ParseOptions::default())
}

fn texts_of(document: &Document, kind: ElementKind) -> Vec<&str> {
    document
        .elements
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.text.as_str())
        .collect()
}

/// Every child sits strictly deeper than its parent.
fn assert_levels_increase(node: &TreeNode) {
    for child in &node.children {
        assert!(
            child.element.level > node.element.level,
            "{:?} is not deeper than {:?}",
            child.element,
            node.element
        );
        assert_levels_increase(child);
    }
}

mod document_fixture {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_every_header() {
        let document = parse_fixture("test-document.md");
        let headers: Vec<_> = document
            .elements
            .iter()
            .filter(|e| e.kind == ElementKind::Header)
            .collect();

        assert!(headers.len() >= 6);
        assert_eq!(headers.iter().filter(|h| h.level == 1).count(), 2);
        assert_eq!(headers[0].text, "Project Overview");
        assert_eq!(headers.last().map(|h| h.level), Some(6));
    }

    #[test]
    fn finds_lists_and_paragraphs() {
        let document = parse_fixture("test-document.md");

        assert!(!texts_of(&document, ElementKind::List).is_empty());
        assert!(!texts_of(&document, ElementKind::Paragraph).is_empty());
        assert_eq!(
            texts_of(&document, ElementKind::NumberedList),
            vec![
                "1. Parse the document",
                "2. Build the tree",
                "3. Render **everything**"
            ]
        );
    }

    #[test]
    fn records_source_lines() {
        let document = parse_fixture("test-document.md");
        let source = load_fixture("test-document.md");
        let lines: Vec<&str> = source.split('\n').collect();

        for element in document
            .elements
            .iter()
            .filter(|e| e.kind == ElementKind::Header)
        {
            let line = element.line_number.expect("headers carry a line number");
            assert!(lines[line as usize - 1].ends_with(&element.text));
        }
    }

    #[test]
    fn tree_keeps_every_element() {
        let document = parse_fixture("test-document.md");

        assert!(document.tree.is_root());
        assert_eq!(document.tree.count_nodes(), document.elements.len() + 1);
        assert_eq!(document.tree.children.len(), 2);
        assert_levels_increase(&document.tree);
    }

    #[test]
    fn stats_match_elements() {
        let document = parse_fixture("test-document.md");
        let stats = document.stats();

        assert_eq!(stats.total(), document.elements.len());
        assert_eq!(stats.headers, texts_of(&document, ElementKind::Header).len());
        assert_eq!(stats.code_blocks, 0);
    }

    #[test]
    fn html_formats_inline_markup() {
        let html = parse_fixture("test-document.md").to_html(&ViewerConfig::default());

        assert!(html.contains("<span class='tree-content header header-1'>Project Overview</span>"));
        assert!(html.contains("Support <em>nested</em> lists"));
        assert!(html.contains(r#"<a href="https://example.com/docs">the docs</a>"#));
        assert!(html.contains("3. Render <strong>everything</strong>"));
    }
}

mod code_block_fixture {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_code_blocks_and_languages() {
        let document = parse_fixture("test-code-blocks.md");
        let stats = document.stats();

        assert!(stats.headers > 0);
        assert!(stats.code_blocks >= 3);
        for language in ["rust", "python", "bash"] {
            assert!(
                stats.languages.contains(language),
                "missing language {language}"
            );
        }
    }

    #[test]
    fn code_content_is_not_structure() {
        let document = parse_fixture("test-code-blocks.md");

        let headers = texts_of(&document, ElementKind::Header);
        assert_eq!(headers, vec!["Code Samples", "Rust", "Python", "Shell", "Indented"]);
        assert!(
            texts_of(&document, ElementKind::List)
                .iter()
                .all(|t| !t.contains("not a list"))
        );
    }

    #[test]
    fn code_block_keeps_its_lines() {
        let document = parse_fixture("test-code-blocks.md");
        let rust = document
            .elements
            .iter()
            .find(|e| e.language() == Some("rust"))
            .expect("rust block");

        assert_eq!(
            rust.text,
            "fn main() {\n    println!(\"# not a header\");\n}"
        );
    }

    #[test]
    fn html_escapes_code() {
        let html = parse_fixture("test-code-blocks.md").to_html(&ViewerConfig::default());

        assert!(html.contains(r#"<pre><code class="rust">"#));
        assert!(html.contains("println!(&quot;# not a header&quot;);"));
    }
}

mod readme_fixture {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fenced_headers_are_ignored() {
        let document = parse_fixture("test-readme-with-code.md");
        let headers = texts_of(&document, ElementKind::Header);

        assert_eq!(headers, vec!["Readme", "Example", "License"]);
        assert!(!headers.contains(&"This header should NOT be parsed"));
        assert!(texts_of(&document, ElementKind::List).is_empty());
    }

    #[test]
    fn code_block_sits_under_its_section() {
        let document = parse_fixture("test-readme-with-code.md");
        let readme = &document.tree.children[0];
        let example = &readme.children[1];

        assert_eq!(example.element.text, "Example");
        assert_eq!(example.children.len(), 1);
        assert_eq!(example.children[0].element.kind, ElementKind::CodeBlock);
        assert_eq!(example.children[0].element.language(), Some("markdown"));
    }
}

#[rstest]
#[case::document("test-document.md")]
#[case::code_blocks("test-code-blocks.md")]
#[case::readme("test-readme-with-code.md")]
fn free_functions_agree_with_document(#[case] name: &str) {
    let source = load_fixture(name);
    let options = ParseOptions::default();
    let elements = parse_document(&source, &options);

    let document = Document::parse(&source, &options);
    assert_eq!(document.elements, elements);
    assert_eq!(document.tree, build_tree(&elements));
}

#[rstest]
#[case::document("test-document.md")]
#[case::code_blocks("test-code-blocks.md")]
#[case::readme("test-readme-with-code.md")]
fn max_depth_bounds_every_level(#[case] name: &str) {
    let options = ParseOptions::default().with_max_depth(2);
    let document = Document::parse(&load_fixture(name), &options);

    assert!(!document.is_empty());
    assert!(document.elements.iter().all(|e| e.level <= 2));
    assert_levels_increase(&document.tree);
}

#[test]
fn page_wraps_fragment() {
    let config = ViewerConfig::default();
    let document = parse_fixture("test-readme-with-code.md");
    let page = document.to_page(&config);

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(&document.to_html(&config)));
}

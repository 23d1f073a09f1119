//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool,
//! following behavior-driven testing principles.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Helper to create a command for the mdtree CLI
fn mdtree_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdtree"))
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        mdtree_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        mdtree_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        mdtree_cmd().assert().failure();
    }
}

mod render_command {
    use super::*;

    #[test]
    fn renders_text_tree() {
        mdtree_cmd()
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("└── Sample\n"))
            .stdout(predicate::str::contains("   ├── Install\n"))
            .stdout(predicate::str::contains("   │ │ └── stable\n"))
            .stdout(predicate::str::contains(
                "      ├── 2. Read the [docs](https://example.com/docs)\n",
            ))
            .stdout(predicate::str::contains("      └── [code sh]\n"))
            .stdout(predicate::str::contains("         mdtree render README.md\n"));
    }

    #[test]
    fn requires_paths() {
        mdtree_cmd()
            .arg("render")
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));
    }

    #[test]
    fn renders_html_fragment() {
        mdtree_cmd()
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .arg("--format")
            .arg("html")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "<span class='tree-content header header-1'>Sample</span>",
            ))
            .stdout(predicate::str::contains(
                "<span class='tree-content paragraph'>An introduction with <strong>bold</strong> text.</span>",
            ))
            .stdout(predicate::str::contains(
                r#"2. Read the <a href="https://example.com/docs">docs</a>"#,
            ))
            .stdout(predicate::str::contains("<!DOCTYPE html>").not());
    }

    #[test]
    fn renders_full_page() {
        mdtree_cmd()
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .args(["--format", "page"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(
                "<title>Markdown Hierarchy Viewer</title>",
            ))
            .stdout(predicate::str::contains(".tree-content.header.header-1"));
    }

    #[test]
    fn renders_json_document() {
        let output = mdtree_cmd()
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .args(["--format", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let file = &value[0];
        assert!(file["path"].as_str().unwrap().ends_with("sample.md"));
        assert_eq!(file["document"]["elements"][0]["type"], "header");
        assert_eq!(file["stats"]["headers"], 3);
        assert_eq!(file["stats"]["codeBlocks"], 1);
    }

    #[test]
    fn rejects_unknown_format() {
        mdtree_cmd()
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .args(["--format", "sarif"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Unknown output format"));
    }

    #[test]
    fn max_depth_limits_output() {
        mdtree_cmd()
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .args(["--max-depth", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Install"))
            .stdout(predicate::str::contains("cargo").not())
            .stdout(predicate::str::contains("[code").not());
    }

    #[test]
    fn no_paragraphs_flag() {
        mdtree_cmd()
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .arg("--no-paragraphs")
            .assert()
            .success()
            .stdout(predicate::str::contains("introduction").not())
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn empty_document_renders_empty_state_in_html() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("empty.md");
        std::fs::write(&file, "plain text before any header\n").unwrap();

        mdtree_cmd()
            .arg("render")
            .arg(&file)
            .args(["--format", "html"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "No headers, lists, or content found in this Markdown file.",
            ));
    }

    #[test]
    fn fails_when_nothing_matches() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        mdtree_cmd()
            .current_dir(temp_dir.path())
            .arg("render")
            .arg("**/*.md")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("No markdown files found"));
    }
}

mod parse_command {
    use super::*;

    #[test]
    fn prints_flat_elements() {
        let output = mdtree_cmd()
            .arg("parse")
            .arg(fixtures_dir().join("sample.md"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let elements: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let elements = elements.as_array().unwrap();

        assert_eq!(elements.len(), 10);
        assert_eq!(elements[0]["text"], "Sample");
        assert_eq!(elements[0]["level"], 1);
        assert_eq!(elements[0]["lineNumber"], 1);
        assert_eq!(elements[4]["text"], "stable");
        assert_eq!(elements[4]["level"], 4);
        assert_eq!(elements[9]["type"], "code-block");
        assert_eq!(elements[9]["metadata"]["language"], "sh");
    }

    #[test]
    fn fails_for_missing_file() {
        mdtree_cmd()
            .arg("parse")
            .arg("does-not-exist.md")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read"));
    }
}

mod format_command {
    use super::*;

    #[test]
    fn formats_inline_markdown() {
        mdtree_cmd()
            .arg("format")
            .arg("Visit [GitHub](https://github.com) now")
            .assert()
            .success()
            .stdout(r#"Visit <a href="https://github.com">GitHub</a> now
"#);
    }

    #[test]
    fn escapes_html() {
        mdtree_cmd()
            .arg("format")
            .arg("a < b && c > d")
            .assert()
            .success()
            .stdout("a &lt; b &amp;&amp; c &gt; d\n");
    }
}

mod verbose_output {
    use super::*;

    #[test]
    fn enables_debug_logging() {
        mdtree_cmd()
            .arg("--verbose")
            .arg("render")
            .arg(fixtures_dir().join("sample.md"))
            .assert()
            .success()
            .stderr(predicate::str::contains("DEBUG"));
    }
}

//! Parallel file rendering.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::ViewerConfig;
use crate::document::Document;
use crate::error::ViewerError;
use crate::stats::ElementStats;

/// Output produced for each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Plain-text tree.
    #[default]
    Text,
    /// Tree lines as an HTML fragment.
    Html,
    /// Stand-alone HTML page.
    Page,
    /// Parsed document as pretty JSON.
    Json,
}

impl FromStr for OutputKind {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "page" => Ok(Self::Page),
            "json" => Ok(Self::Json),
            other => Err(ViewerError::config(format!(
                "Unknown output format '{}' (expected text, html, page or json)",
                other
            ))),
        }
    }
}

/// A successfully rendered file.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub output: String,
    pub stats: ElementStats,
}

pub type RenderFilesResult = (Vec<RenderedFile>, Vec<(PathBuf, ViewerError)>);

/// Renders Markdown `source` into the requested output.
pub fn render_source(
    source: &str,
    config: &ViewerConfig,
    kind: OutputKind,
) -> Result<(String, ElementStats), ViewerError> {
    let document = Document::parse(source, &config.parse);

    let output = match kind {
        OutputKind::Text => document.to_text(config),
        OutputKind::Html => document.to_html(config),
        OutputKind::Page => document.to_page(config),
        OutputKind::Json => serde_json::to_string_pretty(&document)
            .map_err(|e| ViewerError::internal(format!("Failed to serialize document: {}", e)))?,
    };

    Ok((output, document.stats()))
}

/// Reads and renders a single file.
pub fn render_file(
    path: &Path,
    config: &ViewerConfig,
    kind: OutputKind,
) -> Result<RenderedFile, ViewerError> {
    let source = fs::read_to_string(path)
        .map_err(|e| ViewerError::file(format!("Failed to read {}: {}", path.display(), e)))?;

    let (output, stats) = render_source(&source, config, kind)?;
    debug!(
        "Rendered {} ({} elements)",
        path.display(),
        stats.total()
    );

    Ok(RenderedFile {
        path: path.to_path_buf(),
        output,
        stats,
    })
}

/// Renders many files in parallel.
///
/// Results keep the order of `paths`. Failed files are logged and returned
/// separately instead of aborting the batch.
pub fn render_files(paths: &[PathBuf], config: &ViewerConfig, kind: OutputKind) -> RenderFilesResult {
    let results: Vec<Result<RenderedFile, (PathBuf, ViewerError)>> = paths
        .par_iter()
        .map(|path| render_file(path, config, kind).map_err(|e| (path.clone(), e)))
        .collect();

    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(rendered) => successes.push(rendered),
            Err((path, error)) => {
                warn!("Failed to render {}: {}", path.display(), error);
                failures.push((path, error));
            }
        }
    }

    (successes, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn test_render_files_parallel_empty() {
        let (successes, failures) = render_files(&[], &ViewerConfig::default(), OutputKind::Text);

        assert!(successes.is_empty());
        assert!(failures.is_empty());
    }

    #[test]
    fn test_render_files_keeps_order_and_collects_failures() {
        let dir = tempdir().unwrap();
        let mut paths = Vec::new();
        for i in 0..8 {
            let path = dir.path().join(format!("doc{}.md", i));
            fs::write(&path, format!("# Doc {}\n- item", i)).unwrap();
            paths.push(path);
        }
        let missing = dir.path().join("missing.md");
        paths.insert(3, missing.clone());

        let (successes, failures) = render_files(&paths, &ViewerConfig::default(), OutputKind::Text);

        assert_eq!(successes.len(), 8);
        for (i, rendered) in successes.iter().enumerate() {
            assert!(rendered.path.ends_with(format!("doc{}.md", i)));
            assert_eq!(rendered.output, format!("└── Doc {}\n   └── item\n", i));
            assert_eq!(rendered.stats.total(), 2);
        }

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, missing);
        assert!(matches!(failures[0].1, ViewerError::File(_)));
    }

    #[test]
    fn test_render_source_json() {
        let (json, _) =
            render_source("# A\n1. one", &ViewerConfig::default(), OutputKind::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["elements"][1]["type"], "numbered-list");
        assert_eq!(value["elements"][1]["text"], "1. one");
        assert_eq!(value["tree"]["children"][0]["children"][0]["level"], 2);
    }

    #[test]
    fn test_render_source_page() {
        let (page, stats) =
            render_source("# Title", &ViewerConfig::default(), OutputKind::Page).unwrap();

        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("tree-content header header-1"));
        assert_eq!(stats.headers, 1);
    }

    #[rstest]
    #[case("text", OutputKind::Text)]
    #[case("html", OutputKind::Html)]
    #[case("page", OutputKind::Page)]
    #[case("json", OutputKind::Json)]
    fn test_output_kind_from_str(#[case] input: &str, #[case] expected: OutputKind) {
        assert_eq!(input.parse::<OutputKind>().unwrap(), expected);
    }

    #[test]
    fn test_output_kind_unknown() {
        assert!("sarif".parse::<OutputKind>().is_err());
    }
}

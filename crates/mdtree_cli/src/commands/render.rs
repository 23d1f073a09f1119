//! Render command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use mdtree_core::{FileFinder, OutputKind, ParseOptions, render_files};
use tracing::info;

use crate::output::output_results;

use super::load_config;

pub struct RenderArgs<'a> {
    pub paths: &'a [String],
    pub format: &'a str,
    pub max_depth: Option<u32>,
    pub no_paragraphs: bool,
    pub no_lists: bool,
    pub no_headers: bool,
}

impl RenderArgs<'_> {
    /// Applies the command-line overrides on top of the configured options.
    fn parse_options(&self, configured: &ParseOptions) -> ParseOptions {
        let mut options = configured.clone();
        if let Some(max_depth) = self.max_depth {
            options = options.with_max_depth(max_depth);
        }
        if self.no_paragraphs {
            options = options.without_paragraphs();
        }
        if self.no_lists {
            options = options.without_lists();
        }
        if self.no_headers {
            options = options.without_headers();
        }
        options
    }
}

/// Renders every discovered file. Returns true if any file failed.
pub fn run_render(config_path: Option<&Path>, args: &RenderArgs<'_>) -> Result<bool> {
    let kind: OutputKind = args.format.parse().into_diagnostic()?;

    let mut config = load_config(config_path)?;
    config.parse = args.parse_options(&config.parse);

    let base_dir = std::env::current_dir().into_diagnostic()?;
    let finder = FileFinder::new(&config.exclude)
        .into_diagnostic()?
        .with_exclude_base(config.base_dir.as_deref());
    let files = finder.discover_files(args.paths, &base_dir).into_diagnostic()?;

    if files.is_empty() {
        return Err(miette::miette!("No markdown files found"));
    }

    // A page wraps every file, so each file is rendered as a fragment first.
    let per_file = match kind {
        OutputKind::Page => OutputKind::Html,
        other => other,
    };
    let (successes, failures) = render_files(&files, &config, per_file);

    info!(
        "Rendered {} files ({} failed)",
        successes.len(),
        failures.len()
    );

    output_results(&successes, &failures, kind, &config)?;

    Ok(!failures.is_empty())
}

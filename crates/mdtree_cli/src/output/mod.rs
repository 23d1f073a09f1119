//! Output formatting module

mod html;
mod json;
mod text;

use std::path::PathBuf;

use miette::Result;
use mdtree_core::{OutputKind, RenderedFile, ViewerConfig, ViewerError};

pub fn output_results(
    results: &[RenderedFile],
    failures: &[(PathBuf, ViewerError)],
    kind: OutputKind,
    config: &ViewerConfig,
) -> Result<()> {
    match kind {
        OutputKind::Json => json::output_json(results, failures)?,
        OutputKind::Html => html::output_html(results, failures),
        OutputKind::Page => html::output_page(results, failures, config),
        OutputKind::Text => text::output_text(results),
    }

    Ok(())
}

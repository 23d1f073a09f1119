//! Parse command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use mdtree_core::Document;
use tracing::debug;

use super::load_config;

pub fn run_parse(config_path: Option<&Path>, path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let source = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;

    let document = Document::parse(&source, &config.parse);
    debug!(
        "{}: {} elements, {} tree nodes",
        path.display(),
        document.elements.len(),
        document.tree.count_nodes()
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&document.elements).into_diagnostic()?
    );
    Ok(())
}

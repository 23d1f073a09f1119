//! JSON output formatter

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use mdtree_core::{RenderedFile, ViewerError};
use serde_json::value::RawValue;

pub fn output_json(results: &[RenderedFile], failures: &[(PathBuf, ViewerError)]) -> Result<()> {
    let mut output = Vec::with_capacity(results.len() + failures.len());

    for r in results {
        // The rendered output is already a serialised document.
        let document = RawValue::from_string(r.output.clone()).into_diagnostic()?;
        output.push(serde_json::json!({
            "path": r.path.display().to_string(),
            "document": document,
            "stats": r.stats,
        }));
    }
    for (path, error) in failures {
        output.push(serde_json::json!({
            "path": path.display().to_string(),
            "error": error.to_string(),
        }));
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}

//! Subcommand implementations

mod format;
mod init;
mod parse;
mod render;

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use mdtree_core::ViewerConfig;
use tracing::info;

pub use format::run_format;
pub use init::run_init;
pub use parse::run_parse;
pub use render::{RenderArgs, run_render};

/// Loads the config given with `--config`, or the one found in the working
/// directory, or the defaults.
fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    if let Some(path) = path {
        return ViewerConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = ViewerConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ViewerConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(ViewerConfig::new())
}

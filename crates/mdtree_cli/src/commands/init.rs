//! Init command implementation

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use mdtree_core::ViewerConfig;
use tracing::info;

/// Writes the default configuration to `.mdtree.jsonc` in the working
/// directory.
pub fn run_init(force: bool) -> Result<()> {
    let config_path = Path::new(ViewerConfig::CONFIG_FILES[0]);
    let contents = format!(
        "{}\n",
        ViewerConfig::default().to_json_pretty().into_diagnostic()?
    );

    let mut file = match create_new(config_path) {
        Err(e) if e.kind() == ErrorKind::AlreadyExists && force => {
            // An existing symlink is removed, never followed.
            match fs::remove_file(config_path) {
                Err(e) if e.kind() != ErrorKind::NotFound => return Err(e).into_diagnostic(),
                _ => {}
            }
            create_new(config_path).into_diagnostic()?
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(miette::miette!(
                "Config file already exists. Use --force to overwrite."
            ));
        }
        other => other.into_diagnostic()?,
    };

    file.write_all(contents.as_bytes()).into_diagnostic()?;
    info!("Created {}", config_path.display());
    Ok(())
}

fn create_new(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}

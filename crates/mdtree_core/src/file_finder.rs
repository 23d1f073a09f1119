use crate::detection::is_markdown_path;
use crate::error::ViewerError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Resolves command-line paths and glob patterns to Markdown files.
pub struct FileFinder {
    exclude_globs: Option<GlobSet>,
    /// Directory relative exclude patterns are anchored to, besides the
    /// discovery base.
    exclude_base: Option<PathBuf>,
}

impl FileFinder {
    pub fn new(exclude: &[String]) -> Result<Self, ViewerError> {
        let exclude_globs = Self::build_globset(exclude)?;

        Ok(Self {
            exclude_globs,
            exclude_base: None,
        })
    }

    /// Anchors relative exclude patterns to `base` as well, typically the
    /// directory of the loaded config file.
    #[must_use]
    pub fn with_exclude_base(mut self, base: Option<&Path>) -> Self {
        self.exclude_base = base.map(canonical);
        self
    }

    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, ViewerError> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| ViewerError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| ViewerError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Checks if a file matches an exclude pattern, either as given or
    /// relative to `base_dir` or the exclude base.
    fn should_ignore(&self, path: &Path, base_dir: &Path) -> bool {
        let Some(excludes) = &self.exclude_globs else {
            return false;
        };

        excludes.is_match(path)
            || path
                .strip_prefix(base_dir)
                .is_ok_and(|relative| excludes.is_match(relative))
            || self
                .exclude_base
                .as_deref()
                .and_then(|base| path.strip_prefix(base).ok())
                .is_some_and(|relative| excludes.is_match(relative))
    }

    /// Expands `patterns` into a sorted, deduplicated list of canonical paths.
    ///
    /// Relative patterns are resolved against `base_dir`. Existing files are
    /// taken as given, without content detection. Directories are walked for
    /// Markdown files. Anything else is a glob matched against files under
    /// `base_dir`.
    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, ViewerError> {
        let base_dir = canonical(base_dir);
        let mut files = Vec::new();

        let mut glob_builder = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            let path = base_dir.join(pattern);
            let Ok(metadata) = path.symlink_metadata() else {
                let glob = Glob::new(pattern).map_err(|e| {
                    ViewerError::config(format!("Invalid pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
                has_globs = true;
                continue;
            };

            if metadata.file_type().is_file() {
                if let Ok(abs_path) = path.canonicalize() {
                    if self.should_ignore(&abs_path, &base_dir) {
                        continue;
                    }

                    files.push(abs_path);
                }
            } else if metadata.file_type().is_dir() {
                self.walk(&canonical(&path), &base_dir, |_| true, &mut files);
            }
        }

        if has_globs {
            let glob_set = glob_builder
                .build()
                .map_err(|e| ViewerError::config(format!("Failed to build globset: {}", e)))?;

            self.walk(
                &base_dir,
                &base_dir,
                |path| {
                    path.strip_prefix(&base_dir)
                        .is_ok_and(|relative| glob_set.is_match(relative))
                        || glob_set.is_match(path)
                },
                &mut files,
            );
        }

        files.sort();
        files.dedup();

        info!("Discovered {} markdown files", files.len());
        Ok(files)
    }

    /// Walks `dir`, which must be canonical so walked paths compare equal to
    /// canonicalized explicit files.
    fn walk(
        &self,
        dir: &Path,
        base_dir: &Path,
        matches: impl Fn(&Path) -> bool,
        files: &mut Vec<PathBuf>,
    ) {
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !entry.file_type().is_file() || !matches(path) {
                continue;
            }
            if self.should_ignore(path, base_dir) || !is_markdown_path(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

//! Source tree loading
//!
//! Walks a directory, picks the files with the configured extension and reads
//! them as UTF-8 text. Paths come back sorted so the same tree always yields
//! the same analysis order.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::LoadError;
use super::options::AnalysisOptions;

/// One loaded source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// Collects source files below a root directory.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    extension: String,
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::from_options(&AnalysisOptions::default())
    }
}

impl SourceLoader {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn from_options(options: &AnalysisOptions) -> Self {
        Self::new(options.source_extension.clone())
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    /// All matching file paths below `root`, sorted by file name per directory.
    ///
    /// Entries that cannot be visited are logged and left out.
    pub fn collect_paths(&self, root: &Path) -> Result<Vec<PathBuf>, LoadError> {
        if !root.exists() {
            return Err(LoadError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(LoadError::NotADirectory(root.to_path_buf()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry under {}: {}", root.display(), err);
                    continue;
                }
            };
            if entry.file_type().is_file() && self.accepts(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }

    /// Read every matching file below `root`. Files that fail to read are
    /// logged and skipped; only a bad root is an error.
    pub fn load(&self, root: &Path) -> Result<Vec<SourceFile>, LoadError> {
        let paths = self.collect_paths(root)?;
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            match load_file(&path) {
                Ok(file) => files.push(file),
                Err(err) => warn!("{}", err),
            }
        }

        debug!("loaded {} source file(s) from {}", files.len(), root.display());
        Ok(files)
    }
}

/// Read a single source file.
pub fn load_file(path: &Path) -> Result<SourceFile, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|err| LoadError::io(path, err))?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
    })
}

//! Errors raised while loading a source tree.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The source root does not exist.
    #[error("source root not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source root exists but is not a directory.
    #[error("source root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A single file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

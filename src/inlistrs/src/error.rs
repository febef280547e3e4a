// inlistrs/src/error.rs

//! Error types for reading inlists and defaults files.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for inlist operations.
pub type Result<T> = std::result::Result<T, InlistError>;

/// Errors that can occur while reading inlists.
///
/// Parsing itself never fails: unparsable lines are skipped and unparsable
/// values are kept as raw text. Only file access can go wrong.
#[derive(Debug, Error)]
pub enum InlistError {
    /// The file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InlistError {
    /// Wrap an I/O error together with the path that caused it.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        InlistError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Path of the file involved in the error.
    pub fn path(&self) -> &Path {
        match self {
            InlistError::Io { path, .. } => path,
        }
    }

    /// Whether the error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            InlistError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

//! Directory loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a directory source
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file could not be opened or read
    #[error("failed to read directory source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not a JSON array of complete person records
    #[error("malformed directory source: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, LoadError>;

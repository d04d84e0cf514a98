//! Catalog loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("catalog file not found: {path}")]
    NotFound { path: PathBuf },

    /// The catalog file exists but could not be opened or read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV header (or framing) is unreadable.
    #[error("malformed catalog csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

//! Cache error types.

use std::path::PathBuf;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache error types.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Failed to create the cache directory.
    #[error("failed to create cache directory: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a cached table.
    #[error("failed to read cached table: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write a cached table.
    #[error("failed to write cached table: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

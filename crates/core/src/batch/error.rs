//! Error types for the batch module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a batch before any file is processed.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Source directory does not exist.
    #[error("Source directory does not exist: {path}")]
    SourceDirectoryMissing { path: PathBuf },

    /// Source directory could not be listed.
    #[error("Failed to list source directory {path}")]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

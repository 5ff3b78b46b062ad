//! Error types for the tags module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a tag.
///
/// A missing tag block is not an error; readers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TagReadError {
    /// The file could not be read.
    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tag block exists but could not be decoded.
    #[error("Malformed tag in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

impl TagReadError {
    /// Path of the file that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } | Self::Malformed { path, .. } => path,
        }
    }

    /// Whether this is an I/O fault rather than bad tag data.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

//! Trait definitions for the tags module.

use std::path::Path;

use super::error::TagReadError;
use super::types::TagFields;

/// Reads artist/title/album metadata embedded in an audio file.
pub trait TagReader: Send + Sync {
    /// Returns the name of this reader implementation.
    fn name(&self) -> &str;

    /// Reads the tag of the file at `path`.
    ///
    /// Returns `Ok(None)` when the file carries no tag block this reader
    /// understands. Fields are returned as stored, without trimming.
    fn read(&self, path: &Path) -> Result<Option<TagFields>, TagReadError>;
}

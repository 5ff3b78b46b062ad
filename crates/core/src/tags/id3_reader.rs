//! ID3v2 tag reader backed by the `id3` crate.

use id3::TagLike;
use std::path::Path;

use super::error::TagReadError;
use super::traits::TagReader;
use super::types::TagFields;

/// Reads ID3v2 (2.2, 2.3 and 2.4) tags.
///
/// ID3v1 trailers are not consulted; a file carrying only a v1 tag reads as
/// having no tag at all.
#[derive(Debug, Clone, Default)]
pub struct Id3TagReader;

impl Id3TagReader {
    /// Creates a new ID3v2 reader.
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for Id3TagReader {
    fn name(&self) -> &str {
        "id3v2"
    }

    fn read(&self, path: &Path) -> Result<Option<TagFields>, TagReadError> {
        match id3::Tag::read_from_path(path) {
            Ok(tag) => Ok(Some(TagFields::new(tag.artist(), tag.title(), tag.album()))),
            Err(e) => map_error(path, e),
        }
    }
}

/// Sorts `id3` failures into "no tag", I/O faults and bad tag data.
fn map_error(path: &Path, err: id3::Error) -> Result<Option<TagFields>, TagReadError> {
    match err.kind {
        id3::ErrorKind::NoTag => Ok(None),
        id3::ErrorKind::Io(source) => Err(TagReadError::Io {
            path: path.to_path_buf(),
            source,
        }),
        kind => Err(TagReadError::Malformed {
            path: path.to_path_buf(),
            reason: format!("{:?}: {}", kind, err.description),
        }),
    }
}

//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the tag reader and placer
//! traits, plus fixtures that write real ID3v2-tagged files.
//!
//! # Example
//!
//! ```rust,ignore
//! use mp3sort_core::testing::{MockTagReader, MockPlacer};
//!
//! let reader = MockTagReader::new();
//! reader.set_tags("track1.mp3", TagFields::new(Some("Artist"), None, Some("Album")));
//!
//! let placer = MockPlacer::new();
//! placer.fail_file("track2.mp3", std::io::ErrorKind::PermissionDenied);
//! ```

mod mock_placer;
mod mock_tag_reader;

pub use mock_placer::{MockPlacer, RecordedPlacement};
pub use mock_tag_reader::MockTagReader;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Test fixtures and helper functions.
pub mod fixtures {
    use id3::{Tag, TagLike, Version};
    use std::fs;
    use std::path::Path;

    use crate::tags::TagFields;

    /// Placeholder audio payload written before the tag.
    pub const AUDIO_PAYLOAD: &[u8] = b"\xff\xfbmock mpeg payload";

    /// Writes a file at `path` carrying an ID3v2.4 tag with the given fields.
    ///
    /// `body` is written first; the tag is then prepended to it.
    pub fn write_tagged_mp3(path: &Path, fields: &TagFields, body: &[u8]) -> id3::Result<()> {
        fs::write(path, body)?;

        let mut tag = Tag::new();
        if let Some(artist) = &fields.artist {
            tag.set_artist(artist.as_str());
        }
        if let Some(title) = &fields.title {
            tag.set_title(title.as_str());
        }
        if let Some(album) = &fields.album {
            tag.set_album(album.as_str());
        }
        tag.write_to_path(path, Version::Id3v24)
    }

    /// Writes a file with no tag at all.
    pub fn write_untagged_mp3(path: &Path, body: &[u8]) -> std::io::Result<()> {
        fs::write(path, body)
    }

    /// Tag fields with all three values set.
    pub fn full_tags(artist: &str, title: &str, album: &str) -> TagFields {
        TagFields::new(Some(artist), Some(title), Some(album))
    }
}

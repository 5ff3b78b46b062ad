//! Types for the tags module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Raw tag fields as stored in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFields {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
}

impl TagFields {
    /// Creates tag fields from string slices.
    pub fn new(artist: Option<&str>, title: Option<&str>, album: Option<&str>) -> Self {
        Self {
            artist: artist.map(str::to_string),
            title: title.map(str::to_string),
            album: album.map(str::to_string),
        }
    }
}

/// Metadata for one source file, normalized for classification.
///
/// Every field is trimmed; blank values are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFileRecord {
    pub source_path: PathBuf,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
}

impl AudioFileRecord {
    /// Builds a record from whatever the tag reader produced.
    ///
    /// `None` (no tag block) yields a record with every field absent.
    pub fn new(source_path: PathBuf, fields: Option<TagFields>) -> Self {
        let fields = fields.unwrap_or_default();
        Self {
            source_path,
            artist: normalize(fields.artist),
            title: normalize(fields.title),
            album: normalize(fields.album),
        }
    }

    /// Decides whether this file can be placed.
    ///
    /// Artist and album are both required; title is optional.
    pub fn classify(&self) -> Classification {
        match (&self.artist, &self.album) {
            (None, _) => Classification::Skipped {
                reason: SkipReason::MissingArtist,
            },
            (_, None) => Classification::Skipped {
                reason: SkipReason::MissingAlbum,
            },
            (Some(artist), Some(album)) => Classification::Processable {
                artist: artist.clone(),
                album: album.clone(),
                title: self.title.clone(),
            },
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Skip-or-process decision for a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Processable {
        artist: String,
        album: String,
        title: Option<String>,
    },
    Skipped {
        reason: SkipReason,
    },
}

/// Why a file was left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingArtist,
    MissingAlbum,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArtist => write!(f, "missing artist"),
            Self::MissingAlbum => write!(f, "missing album"),
        }
    }
}

//! Types for the placer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tags::SkipReason;

/// Where a processable file belongs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLocation {
    /// `dest_root/artist/album`.
    pub directory: PathBuf,
    /// File name inside `directory`.
    pub file_name: String,
}

impl TargetLocation {
    /// Full target path.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Information about a moved file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFile {
    /// Where the file was.
    pub source: PathBuf,
    /// Where the file is now.
    pub destination: PathBuf,
}

/// Result of placing one file that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// File was moved into the tree.
    Moved(PlacedFile),
    /// File was left untouched in the source directory.
    Skipped { reason: SkipReason },
}

impl Placement {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_location_path() {
        let target = TargetLocation {
            directory: PathBuf::from("/out").join("Artist").join("Album"),
            file_name: "Song - Artist - Album.mp3".to_string(),
        };
        assert_eq!(
            target.path(),
            PathBuf::from("/out/Artist/Album/Song - Artist - Album.mp3")
        );
    }

    #[test]
    fn test_placement_is_moved() {
        let moved = Placement::Moved(PlacedFile {
            source: PathBuf::from("a.mp3"),
            destination: PathBuf::from("x/y/a.mp3"),
        });
        let skipped = Placement::Skipped {
            reason: SkipReason::MissingAlbum,
        };
        assert!(moved.is_moved());
        assert!(!skipped.is_moved());
    }
}

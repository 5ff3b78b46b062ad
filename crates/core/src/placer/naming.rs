//! Target path computation.

use std::path::Path;

use super::types::TargetLocation;

/// Extension of the files this tool sorts, matched case-sensitively.
pub const MP3_EXTENSION: &str = ".mp3";

/// Computes the target directory and file name for a processable file.
///
/// The directory is `dest_root/artist/album`. The file name is
/// `"{title} - {artist} - {album}.mp3"` when a title is known, otherwise the
/// original file name is kept. Artist and album are used verbatim as path
/// segments.
pub fn build_target(
    dest_root: &Path,
    artist: &str,
    album: &str,
    title: Option<&str>,
    original_file_name: &str,
) -> TargetLocation {
    let file_name = match title {
        Some(title) => format!("{} - {} - {}{}", title, artist, album, MP3_EXTENSION),
        None => original_file_name.to_string(),
    };

    TargetLocation {
        directory: dest_root.join(artist).join(album),
        file_name,
    }
}

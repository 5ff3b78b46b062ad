//! Path formatting for log output.

use std::path::Path;

/// Renders `path` relative to `root` when it lies under `root`.
///
/// Paths outside `root` (including relative paths when `root` is absolute)
/// are rendered unchanged.
pub fn relative_to(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_path_under_root() {
        let root = PathBuf::from("/home/user/music");
        let path = root.join("Artist").join("Album").join("song.mp3");
        assert_eq!(
            relative_to(&path, &root),
            PathBuf::from("Artist").join("Album").join("song.mp3").display().to_string()
        );
    }

    #[test]
    fn test_path_outside_root() {
        let root = Path::new("/home/user/music");
        let path = Path::new("/mnt/library/song.mp3");
        assert_eq!(relative_to(path, root), "/mnt/library/song.mp3");
    }

    #[test]
    fn test_sibling_with_common_prefix_is_not_under_root() {
        let root = Path::new("/home/user/music");
        let path = Path::new("/home/user/music-old/song.mp3");
        assert_eq!(relative_to(path, root), "/home/user/music-old/song.mp3");
    }

    #[test]
    fn test_root_itself_is_unchanged() {
        let root = Path::new("/home/user/music");
        assert_eq!(relative_to(root, root), "/home/user/music");
    }

    #[test]
    fn test_relative_path_with_absolute_root() {
        let root = Path::new("/home/user");
        assert_eq!(relative_to(Path::new("in/a.mp3"), root), "in/a.mp3");
    }
}

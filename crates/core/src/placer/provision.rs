//! Target directory preparation.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use tracing::debug;

use super::config::PlacerConfig;
use super::error::ProvisionError;

#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;

/// Prefix of the short-lived file used to probe write access.
const PROBE_PREFIX: &str = ".mp3sort-probe-";

/// Makes sure a target directory exists and is writable.
#[derive(Debug, Clone)]
pub struct DirectoryProvisioner {
    directory_mode: u32,
}

impl DirectoryProvisioner {
    /// Creates a provisioner using the mode from `config`.
    pub fn new(config: &PlacerConfig) -> Self {
        Self {
            directory_mode: config.directory_mode,
        }
    }

    /// Ensures `path` is a writable directory, creating missing segments.
    ///
    /// An existing directory is only checked, never modified.
    pub fn ensure(&self, path: &Path) -> Result<(), ProvisionError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Self::check_writable(path),
            Ok(_) => Err(ProvisionError::NotADirectory {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.create(path),
            Err(e) => Err(ProvisionError::CreateFailed {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    fn create(&self, path: &Path) -> Result<(), ProvisionError> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(self.directory_mode);

        builder
            .create(path)
            .map_err(|e| ProvisionError::CreateFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("Created directory {}", path.display());
        Ok(())
    }

    /// Probes write access by creating and removing a temporary file.
    ///
    /// A probe that cannot be removed does not fail the check.
    fn check_writable(path: &Path) -> Result<(), ProvisionError> {
        let probe = tempfile::Builder::new()
            .prefix(PROBE_PREFIX)
            .tempfile_in(path)
            .map_err(|e| ProvisionError::NotWritable {
                path: path.to_path_buf(),
                source: e,
            })?;

        let probe_path = probe.path().to_path_buf();
        if let Err(e) = probe.close() {
            debug!(
                "Could not remove write probe {}: {}",
                probe_path.display(),
                e
            );
        }
        Ok(())
    }
}

impl Default for DirectoryProvisioner {
    fn default() -> Self {
        Self::new(&PlacerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_chain() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("Artist").join("Album");

        DirectoryProvisioner::default().ensure(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_existing_chain_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("Artist").join("Album");
        let provisioner = DirectoryProvisioner::default();

        provisioner.ensure(&target).unwrap();
        provisioner.ensure(&target).unwrap();

        // Partially existing chain
        let sibling = temp.path().join("Artist").join("Other Album");
        provisioner.ensure(&sibling).unwrap();
        assert!(sibling.is_dir());
    }

    #[test]
    fn test_probe_file_is_removed() {
        let temp = TempDir::new().unwrap();
        DirectoryProvisioner::default().ensure(temp.path()).unwrap();
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Artist");
        fs::write(&path, "not a dir").unwrap();

        let err = DirectoryProvisioner::default().ensure(&path).unwrap_err();
        assert!(matches!(err, ProvisionError::NotADirectory { .. }));
    }

    #[test]
    fn test_file_in_chain_fails_creation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Artist"), "not a dir").unwrap();
        let target = temp.path().join("Artist").join("Album");

        let err = DirectoryProvisioner::default().ensure(&target).unwrap_err();
        assert!(matches!(err, ProvisionError::CreateFailed { .. }));
        assert_eq!(err.path(), &target);
    }

    #[cfg(unix)]
    #[test]
    fn test_created_directory_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("restricted");
        let config = PlacerConfig::default().with_directory_mode(0o700);

        DirectoryProvisioner::new(&config).ensure(&target).unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_directory_is_not_writable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("locked");
        fs::create_dir(&target).unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users bypass permission bits
        if fs::write(target.join("probe"), b"").is_ok() {
            return;
        }

        let result = DirectoryProvisioner::default().ensure(&target);
        fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result, Err(ProvisionError::NotWritable { .. })));
    }
}

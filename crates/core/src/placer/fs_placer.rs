//! File system placer implementation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use super::config::PlacerConfig;
use super::error::{MoveFailureCause, PlacerError};
use super::naming::build_target;
use super::provision::DirectoryProvisioner;
use super::traits::Placer;
use super::types::{PlacedFile, Placement};
use crate::display::relative_to;
use crate::tags::{AudioFileRecord, Classification, TagReader};

/// File system based placer implementation.
pub struct FsPlacer<R> {
    reader: R,
    provisioner: DirectoryProvisioner,
    display_root: Option<PathBuf>,
}

impl<R: TagReader> FsPlacer<R> {
    /// Creates a new file system placer with the given configuration.
    pub fn new(config: PlacerConfig, reader: R) -> Self {
        Self {
            reader,
            provisioner: DirectoryProvisioner::new(&config),
            display_root: None,
        }
    }

    /// Creates a placer with default configuration.
    pub fn with_defaults(reader: R) -> Self {
        Self::new(PlacerConfig::default(), reader)
    }

    /// Shows logged paths relative to `root` when they fall under it.
    pub fn with_display_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.display_root = Some(root.into());
        self
    }

    /// The tag reader in use.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Reads and normalizes the tag of `path`.
    ///
    /// Reader failures count as "no tag"; they are logged, not propagated.
    fn read_record(&self, path: &Path) -> AudioFileRecord {
        let fields = match self.reader.read(path) {
            Ok(fields) => fields,
            Err(e) if e.is_io() => {
                warn!("Could not read tags of {}: {}", self.display(path), e);
                None
            }
            Err(e) => {
                debug!("Ignoring unreadable tag: {}", e);
                None
            }
        };
        AudioFileRecord::new(path.to_path_buf(), fields)
    }

    /// Moves `from` to `to`, replacing a file already at `to`.
    ///
    /// `rename` swaps the target atomically on the same filesystem. Moves
    /// across devices are not attempted by copy.
    fn move_replacing(file_name: &str, from: &Path, to: &Path) -> Result<(), PlacerError> {
        fs::rename(from, to)
            .map_err(|e| PlacerError::move_failed(file_name, from.to_path_buf(), to.to_path_buf(), e))
    }

    /// Renders `path` for log lines, relative to the display root if set.
    fn display(&self, path: &Path) -> String {
        match &self.display_root {
            Some(root) => relative_to(path, root),
            None => path.display().to_string(),
        }
    }
}

impl<R: TagReader> Placer for FsPlacer<R> {
    fn name(&self) -> &str {
        "fs"
    }

    fn place(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        file_name: &str,
    ) -> Result<Placement, PlacerError> {
        let source = source_dir.join(file_name);
        let record = self.read_record(&source);

        let (artist, album, title) = match record.classify() {
            Classification::Processable {
                artist,
                album,
                title,
            } => (artist, album, title),
            Classification::Skipped { reason } => {
                debug!("Skipping {}: {}", self.display(&source), reason);
                return Ok(Placement::Skipped { reason });
            }
        };

        let target = build_target(dest_dir, &artist, &album, title.as_deref(), file_name);

        if let Err(e) = self.provisioner.ensure(&target.directory) {
            error!(
                "unable to create path {}, check permissions and try again: {}",
                self.display(&target.directory),
                e
            );
            return Err(PlacerError::provision_failed(e));
        }

        let destination = target.path();
        if let Err(e) = Self::move_replacing(file_name, &source, &destination) {
            let cause = e.move_cause().unwrap_or(MoveFailureCause::Other);
            error!(
                "cannot move {}, it may be write-protected ({}), check this and try again",
                file_name, cause
            );
            return Err(e);
        }

        info!("{} > {}", self.display(&source), self.display(&destination));

        Ok(Placement::Moved(PlacedFile {
            source,
            destination,
        }))
    }
}

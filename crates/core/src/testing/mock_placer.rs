//! Mock placer for testing.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::{read, write};
use crate::placer::{PlacedFile, Placement, Placer, PlacerError};
use crate::tags::SkipReason;

/// A recorded placement call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPlacement {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, Copy)]
enum Scripted {
    Fail(io::ErrorKind),
    Skip(SkipReason),
}

/// Mock implementation of the Placer trait.
///
/// Never touches the filesystem. By default every file is reported as moved
/// to `dest_dir/file_name`; individual files can be scripted to fail or be
/// skipped. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockPlacer {
    placements: Arc<RwLock<Vec<RecordedPlacement>>>,
    scripted: Arc<RwLock<HashMap<String, Scripted>>>,
}

impl MockPlacer {
    /// Create a new mock placer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make placing `file_name` fail with a move error of the given kind.
    pub fn fail_file(&self, file_name: &str, kind: io::ErrorKind) {
        write(&self.scripted).insert(file_name.to_string(), Scripted::Fail(kind));
    }

    /// Make placing `file_name` report a skip.
    pub fn skip_file(&self, file_name: &str, reason: SkipReason) {
        write(&self.scripted).insert(file_name.to_string(), Scripted::Skip(reason));
    }

    /// Get all recorded placements.
    pub fn recorded_placements(&self) -> Vec<RecordedPlacement> {
        read(&self.placements).clone()
    }

    /// Get the number of placements performed.
    pub fn placement_count(&self) -> usize {
        read(&self.placements).len()
    }
}

impl Placer for MockPlacer {
    fn name(&self) -> &str {
        "mock"
    }

    fn place(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        file_name: &str,
    ) -> Result<Placement, PlacerError> {
        write(&self.placements).push(RecordedPlacement {
            source_dir: source_dir.to_path_buf(),
            dest_dir: dest_dir.to_path_buf(),
            file_name: file_name.to_string(),
        });

        let source = source_dir.join(file_name);
        let destination = dest_dir.join(file_name);
        match read(&self.scripted).get(file_name).copied() {
            Some(Scripted::Fail(kind)) => Err(PlacerError::move_failed(
                file_name,
                source,
                destination,
                io::Error::from(kind),
            )),
            Some(Scripted::Skip(reason)) => Ok(Placement::Skipped { reason }),
            None => Ok(Placement::Moved(PlacedFile {
                source,
                destination,
            })),
        }
    }
}

//! Batch driver implementation.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::error::BatchError;
use super::types::{BatchReport, FileOutcome, FileReport};
use crate::placer::{Placement, Placer, MP3_EXTENSION};

/// Runs a placer over every eligible file of a source directory.
pub struct BatchDriver<P> {
    placer: P,
}

impl<P: Placer> BatchDriver<P> {
    /// Creates a driver around `placer`.
    pub fn new(placer: P) -> Self {
        Self { placer }
    }

    /// The placer in use.
    pub fn placer(&self) -> &P {
        &self.placer
    }

    /// Sorts the files of `source_dir` into `dest_dir`.
    ///
    /// Fails only when `source_dir` is missing or cannot be listed; in that
    /// case no file is touched. An empty listing is not an error.
    pub fn run(&self, source_dir: &Path, dest_dir: &Path) -> Result<BatchReport, BatchError> {
        if !source_dir.exists() {
            return Err(BatchError::SourceDirectoryMissing {
                path: source_dir.to_path_buf(),
            });
        }

        let files = list_eligible_files(source_dir)?;
        if files.is_empty() {
            warn!(
                "no eligible files found: there are no *{} files in {}",
                MP3_EXTENSION,
                source_dir.display()
            );
            return Ok(BatchReport::default());
        }

        debug!(
            "Sorting {} files from {} into {} with placer {}",
            files.len(),
            source_dir.display(),
            dest_dir.display(),
            self.placer.name()
        );

        let mut report = BatchReport::default();
        for file_name in files {
            let outcome = match self.placer.place(source_dir, dest_dir, &file_name) {
                Ok(Placement::Moved(placed)) => FileOutcome::Moved(placed),
                Ok(Placement::Skipped { reason }) => FileOutcome::Skipped(reason),
                Err(e) => FileOutcome::Failed(e),
            };
            report.files.push(FileReport { file_name, outcome });
        }

        info!("Done");
        Ok(report)
    }
}

/// Lists the names of regular files directly inside `dir` that end in `.mp3`.
///
/// Subdirectories are not descended into. The suffix match is
/// case-sensitive and names that are not valid UTF-8 are ignored. Order is
/// whatever the directory listing returns.
pub fn list_eligible_files(dir: &Path) -> Result<Vec<String>, BatchError> {
    let listing_failed = |e: std::io::Error| BatchError::ListingFailed {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(listing_failed)? {
        let entry = entry.map_err(listing_failed)?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!("Ignoring non UTF-8 file name {:?}", raw);
                continue;
            }
        };
        if name.ends_with(MP3_EXTENSION) && entry.path().is_file() {
            names.push(name);
        }
    }
    Ok(names)
}

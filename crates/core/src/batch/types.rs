//! Types for the batch module.

use crate::placer::{PlacedFile, PlacerError};
use crate::tags::SkipReason;

/// What happened to one file.
#[derive(Debug)]
pub enum FileOutcome {
    Moved(PlacedFile),
    Skipped(SkipReason),
    Failed(PlacerError),
}

impl FileOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome for one listed file.
#[derive(Debug)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// Per-file outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// True when no eligible file was found.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files that were moved into the tree.
    pub fn moved(&self) -> impl Iterator<Item = &PlacedFile> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Moved(placed) => Some(placed),
            _ => None,
        })
    }

    /// Names of files left in the source directory because of missing tags.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Skipped(_) => Some(f.file_name.as_str()),
            _ => None,
        })
    }

    /// Names of files whose placement failed.
    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|f| f.outcome.is_failed())
            .map(|f| f.file_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_report_accessors() {
        let report = BatchReport {
            files: vec![
                FileReport {
                    file_name: "a.mp3".to_string(),
                    outcome: FileOutcome::Moved(PlacedFile {
                        source: PathBuf::from("in/a.mp3"),
                        destination: PathBuf::from("out/A/B/a.mp3"),
                    }),
                },
                FileReport {
                    file_name: "b.mp3".to_string(),
                    outcome: FileOutcome::Skipped(SkipReason::MissingArtist),
                },
                FileReport {
                    file_name: "c.mp3".to_string(),
                    outcome: FileOutcome::Failed(PlacerError::move_failed(
                        "c.mp3",
                        PathBuf::from("in/c.mp3"),
                        PathBuf::from("out/A/B/c.mp3"),
                        io::Error::from(io::ErrorKind::PermissionDenied),
                    )),
                },
            ],
        };

        assert!(!report.is_empty());
        assert_eq!(report.moved().count(), 1);
        assert_eq!(report.skipped().collect::<Vec<_>>(), vec!["b.mp3"]);
        assert_eq!(report.failed().collect::<Vec<_>>(), vec!["c.mp3"]);
    }

    #[test]
    fn test_default_report_is_empty() {
        assert!(BatchReport::default().is_empty());
    }
}

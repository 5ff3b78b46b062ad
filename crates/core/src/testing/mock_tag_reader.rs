//! Mock tag reader for testing.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::{read, write};
use crate::tags::{TagFields, TagReadError, TagReader};

/// Mock implementation of the TagReader trait.
///
/// Tags are keyed by file name, so the same mock serves any directory.
/// Files without configured tags read as untagged. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockTagReader {
    tags: Arc<RwLock<HashMap<String, TagFields>>>,
    io_failures: Arc<RwLock<HashSet<String>>>,
    malformed: Arc<RwLock<HashSet<String>>>,
    reads: Arc<RwLock<Vec<PathBuf>>>,
}

impl MockTagReader {
    /// Create a new mock reader where every file is untagged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the tag returned for `file_name`.
    pub fn set_tags(&self, file_name: &str, fields: TagFields) {
        write(&self.tags).insert(file_name.to_string(), fields);
    }

    /// Make reads of `file_name` fail with an I/O error.
    pub fn fail_with_io(&self, file_name: &str) {
        write(&self.io_failures).insert(file_name.to_string());
    }

    /// Make reads of `file_name` report a malformed tag.
    pub fn fail_as_malformed(&self, file_name: &str) {
        write(&self.malformed).insert(file_name.to_string());
    }

    /// Paths that were read, in order.
    pub fn recorded_reads(&self) -> Vec<PathBuf> {
        read(&self.reads).clone()
    }

    /// Number of reads performed.
    pub fn read_count(&self) -> usize {
        read(&self.reads).len()
    }
}

impl TagReader for MockTagReader {
    fn name(&self) -> &str {
        "mock"
    }

    fn read(&self, path: &Path) -> Result<Option<TagFields>, TagReadError> {
        write(&self.reads).push(path.to_path_buf());

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if read(&self.io_failures).contains(&file_name) {
            return Err(TagReadError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("mock read failure"),
            });
        }
        if read(&self.malformed).contains(&file_name) {
            return Err(TagReadError::Malformed {
                path: path.to_path_buf(),
                reason: "mock malformed tag".to_string(),
            });
        }

        Ok(read(&self.tags).get(&file_name).cloned())
    }
}

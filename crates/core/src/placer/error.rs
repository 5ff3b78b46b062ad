//! Error types for the placer module.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from preparing a target directory.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Directory exists but the process cannot write into it.
    #[error("Directory is not writable: {path}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to create the directory chain.
    #[error("Failed to create directory: {path}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProvisionError {
    /// The directory that could not be provisioned.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotADirectory { path }
            | Self::NotWritable { path, .. }
            | Self::CreateFailed { path, .. } => path,
        }
    }
}

/// Errors that can occur while placing a single file.
#[derive(Debug, Error)]
pub enum PlacerError {
    /// Target directory could not be created or written to.
    #[error("Unable to create path {path}")]
    DirectoryProvision {
        path: PathBuf,
        #[source]
        source: ProvisionError,
    },

    /// Failed to move/rename file.
    #[error("Cannot move {file_name} from {from} to {to}")]
    MoveFailed {
        file_name: String,
        from: PathBuf,
        to: PathBuf,
        cause: MoveFailureCause,
        #[source]
        error: io::Error,
    },
}

impl PlacerError {
    /// Creates a directory provisioning error.
    pub fn provision_failed(source: ProvisionError) -> Self {
        Self::DirectoryProvision {
            path: source.path().clone(),
            source,
        }
    }

    /// Creates a move failed error.
    ///
    /// The cause is classified against the source path at the time of the
    /// failure.
    pub fn move_failed(file_name: &str, from: PathBuf, to: PathBuf, error: io::Error) -> Self {
        let cause = MoveFailureCause::from_rename(&error, &from);
        Self::MoveFailed {
            file_name: file_name.to_string(),
            from,
            to,
            cause,
            error,
        }
    }

    /// Classifies the underlying cause of a failed move.
    ///
    /// Returns `None` for directory provisioning failures.
    pub fn move_cause(&self) -> Option<MoveFailureCause> {
        match self {
            Self::MoveFailed { cause, .. } => Some(*cause),
            Self::DirectoryProvision { .. } => None,
        }
    }
}

/// Why a rename did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFailureCause {
    PermissionDenied,
    CrossDevice,
    Locked,
    SourceMissing,
    TargetParentMissing,
    TargetIsDirectory,
    Other,
}

impl MoveFailureCause {
    /// Maps an I/O error from `rename` to a cause.
    pub fn from_io(error: &io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::CrossesDevices => Self::CrossDevice,
            io::ErrorKind::ResourceBusy => Self::Locked,
            io::ErrorKind::NotFound => Self::SourceMissing,
            io::ErrorKind::IsADirectory | io::ErrorKind::DirectoryNotEmpty => {
                Self::TargetIsDirectory
            }
            _ => Self::from_raw_os_error(error.raw_os_error()),
        }
    }

    /// Like [`from_io`](Self::from_io), but tells a vanished source apart
    /// from a missing target directory.
    ///
    /// `rename` reports both as not found.
    pub fn from_rename(error: &io::Error, source: &Path) -> Self {
        match Self::from_io(error) {
            Self::SourceMissing if source.exists() => Self::TargetParentMissing,
            cause => cause,
        }
    }

    #[cfg(unix)]
    fn from_raw_os_error(code: Option<i32>) -> Self {
        // EBUSY = 16, EXDEV = 18
        match code {
            Some(16) => Self::Locked,
            Some(18) => Self::CrossDevice,
            _ => Self::Other,
        }
    }

    #[cfg(windows)]
    fn from_raw_os_error(code: Option<i32>) -> Self {
        // ERROR_NOT_SAME_DEVICE = 17, ERROR_SHARING_VIOLATION = 32, ERROR_LOCK_VIOLATION = 33
        match code {
            Some(17) => Self::CrossDevice,
            Some(32) | Some(33) => Self::Locked,
            _ => Self::Other,
        }
    }

    #[cfg(not(any(unix, windows)))]
    fn from_raw_os_error(_code: Option<i32>) -> Self {
        Self::Other
    }
}

impl fmt::Display for MoveFailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PermissionDenied => "permission denied",
            Self::CrossDevice => "source and target are on different devices",
            Self::Locked => "file is locked or busy",
            Self::SourceMissing => "source file is gone",
            Self::TargetParentMissing => "target directory does not exist",
            Self::TargetIsDirectory => "target path is a directory",
            Self::Other => "unexpected I/O error",
        };
        f.write_str(text)
    }
}

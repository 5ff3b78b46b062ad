//! Placer module for moving tagged files into an artist/album tree.
//!
//! This module provides the `Placer` trait and the `FsPlacer`
//! implementation, which for each source file:
//!
//! - Reads its tag through a [`TagReader`](crate::tags::TagReader)
//! - Skips it (leaving it untouched) when artist or album is missing
//! - Computes `dest/<artist>/<album>/<title> - <artist> - <album>.mp3`
//! - Creates the target directory chain when needed
//! - Moves the file, replacing any file already at the target path
//!
//! # Example
//!
//! ```ignore
//! use mp3sort_core::placer::{FsPlacer, Placement, Placer, PlacerConfig};
//! use mp3sort_core::tags::Id3TagReader;
//!
//! let placer = FsPlacer::new(PlacerConfig::default(), Id3TagReader::new());
//!
//! match placer.place(Path::new("incoming"), Path::new("library"), "track1.mp3")? {
//!     Placement::Moved(file) => println!("now at {}", file.destination.display()),
//!     Placement::Skipped { reason } => println!("left alone: {}", reason),
//! }
//! ```

mod config;
mod error;
mod fs_placer;
mod naming;
mod provision;
mod traits;
mod types;

pub use config::PlacerConfig;
pub use error::{MoveFailureCause, PlacerError, ProvisionError};
pub use fs_placer::FsPlacer;
pub use naming::{build_target, MP3_EXTENSION};
pub use provision::DirectoryProvisioner;
pub use traits::Placer;
pub use types::{PlacedFile, Placement, TargetLocation};

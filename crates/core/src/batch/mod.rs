//! Batch module for sorting a whole source directory.
//!
//! The `BatchDriver` lists the `.mp3` files directly inside a source
//! directory and hands each one to a [`Placer`](crate::placer::Placer), in
//! listing order. Per-file failures are logged by the placer and recorded in
//! the report; they never stop the batch.
//!
//! # Example
//!
//! ```ignore
//! use mp3sort_core::batch::BatchDriver;
//! use mp3sort_core::placer::FsPlacer;
//! use mp3sort_core::tags::Id3TagReader;
//!
//! let driver = BatchDriver::new(FsPlacer::with_defaults(Id3TagReader::new()));
//! let report = driver.run(Path::new("incoming"), Path::new("library"))?;
//! println!("{} files looked at", report.files.len());
//! ```

mod driver;
mod error;
mod types;

pub use driver::{list_eligible_files, BatchDriver};
pub use error::BatchError;
pub use types::{BatchReport, FileOutcome, FileReport};

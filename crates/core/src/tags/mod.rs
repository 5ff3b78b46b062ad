//! Tag reading for audio files.
//!
//! A [`TagReader`] turns a file path into the raw artist/title/album fields
//! of its embedded tag. A file without a tag block is a normal outcome
//! (`Ok(None)`), not an error.
//!
//! # Example
//!
//! ```ignore
//! use mp3sort_core::tags::{Id3TagReader, TagReader};
//!
//! let reader = Id3TagReader::new();
//! if let Some(fields) = reader.read(Path::new("incoming/track1.mp3"))? {
//!     println!("artist: {:?}", fields.artist);
//! }
//! ```

mod error;
mod id3_reader;
mod traits;
mod types;

pub use error::TagReadError;
pub use id3_reader::Id3TagReader;
pub use traits::TagReader;
pub use types::{AudioFileRecord, Classification, SkipReason, TagFields};

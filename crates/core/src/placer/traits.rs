//! Trait definitions for the placer module.

use std::path::Path;

use super::error::PlacerError;
use super::types::Placement;

/// A placer that files one source file into the destination tree.
pub trait Placer: Send + Sync {
    /// Returns the name of this placer implementation.
    fn name(&self) -> &str;

    /// Places `source_dir/file_name` under `dest_dir`.
    ///
    /// Files that cannot be classified come back as
    /// [`Placement::Skipped`] and are left where they are.
    fn place(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        file_name: &str,
    ) -> Result<Placement, PlacerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placer::PlacedFile;

    struct EchoPlacer;

    impl Placer for EchoPlacer {
        fn name(&self) -> &str {
            "echo"
        }

        fn place(
            &self,
            source_dir: &Path,
            dest_dir: &Path,
            file_name: &str,
        ) -> Result<Placement, PlacerError> {
            Ok(Placement::Moved(PlacedFile {
                source: source_dir.join(file_name),
                destination: dest_dir.join(file_name),
            }))
        }
    }

    #[test]
    fn test_placer_as_trait_object() {
        let placer: Box<dyn Placer> = Box::new(EchoPlacer);
        let result = placer
            .place(Path::new("in"), Path::new("out"), "a.mp3")
            .unwrap();
        assert_eq!(placer.name(), "echo");
        assert!(result.is_moved());
    }
}

//! Configuration for the placer module.

use serde::{Deserialize, Serialize};

/// Configuration for the file system placer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Permissions for created directories (Unix only, octal, before umask).
    #[serde(default = "default_dir_mode")]
    pub directory_mode: u32,
}

fn default_dir_mode() -> u32 {
    0o777
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            directory_mode: default_dir_mode(),
        }
    }
}

impl PlacerConfig {
    /// Sets the mode used for created directories.
    pub fn with_directory_mode(mut self, mode: u32) -> Self {
        self.directory_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacerConfig::default();
        assert_eq!(config.directory_mode, 0o777);
    }

    #[test]
    fn test_config_builder() {
        let config = PlacerConfig::default().with_directory_mode(0o750);
        assert_eq!(config.directory_mode, 0o750);
    }
}

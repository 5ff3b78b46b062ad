use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::placer::PlacerConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sorter: SorterConfig,
    #[serde(default)]
    pub placer: PlacerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source and destination directories.
///
/// Both are optional; the command line overrides them and the current
/// working directory fills in whatever is still missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SorterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.sorter.source_dir.is_none());
        assert!(config.sorter.dest_dir.is_none());
        assert_eq!(config.placer.directory_mode, 0o777);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[sorter]
source_dir = "/music/incoming"
dest_dir = "/music/library"

[placer]
directory_mode = 0o755

[logging]
filter = "mp3sort_core=debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.sorter.source_dir.unwrap().to_str().unwrap(),
            "/music/incoming"
        );
        assert_eq!(
            config.sorter.dest_dir.unwrap().to_str().unwrap(),
            "/music/library"
        );
        assert_eq!(config.placer.directory_mode, 0o755);
        assert_eq!(config.logging.filter, "mp3sort_core=debug");
    }

    #[test]
    fn test_deserialize_partial_sorter_section() {
        let toml = r#"
[sorter]
dest_dir = "out"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.sorter.source_dir.is_none());
        assert_eq!(config.sorter.dest_dir.unwrap().to_str().unwrap(), "out");
    }

    #[test]
    fn test_deserialize_unknown_field_type_fails() {
        let toml = r#"
[placer]
directory_mode = "rwx"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}

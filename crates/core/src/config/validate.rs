use super::{types::Config, ConfigError};

/// Highest mode accepted for created directories (permission + special bits).
const MAX_DIRECTORY_MODE: u32 = 0o7777;

/// Validate configuration
/// Currently validates:
/// - Directory mode fits in the permission bits
/// - Logging filter is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.placer.directory_mode > MAX_DIRECTORY_MODE {
        return Err(ConfigError::ValidationError(format!(
            "placer.directory_mode {:o} exceeds {:o}",
            config.placer.directory_mode, MAX_DIRECTORY_MODE
        )));
    }

    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.filter cannot be empty".to_string(),
        ));
    }

    Ok(())
}

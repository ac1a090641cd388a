//! Application configuration loading from disk.

use std::path::Path;

use crate::domain::configuration::{DEFAULT_CONFIG_FILE, parse_config_content};
use crate::domain::{AppConfig, AppError};

/// Load configuration from an explicit path, or from `promptopt.toml` in the
/// current directory when no path is given.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    match explicit {
        Some(path) => load_config_from(path, true),
        None => {
            let path = std::env::current_dir()?.join(DEFAULT_CONFIG_FILE);
            load_config_from(&path, false)
        }
    }
}

/// Load configuration from `path`, falling back to defaults when the file is
/// absent and `required` is false.
pub fn load_config_from(path: &Path, required: bool) -> Result<AppConfig, AppError> {
    if !path.exists() {
        if required {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "No config file; using defaults");
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_config_content(&content)
}

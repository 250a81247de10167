//! Game configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::DEFAULT_SIZE;
use tracing::{debug, info, instrument};

/// Largest board the `row,col` move syntax can address (single digits).
pub const MAX_SIZE: usize = 10;

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_size")]
    #[getter(copy)]
    size: usize,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration for a `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration: file (or defaults), then
    /// `size` override, then validation.
    #[instrument]
    pub fn load(path: Option<&Path>, size: Option<usize>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(size) = size {
            debug!(size, "Size overridden from command line");
            config.size = size;
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks that the board size is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "Board size must be between 1 and {}, got {}",
                MAX_SIZE, self.size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = GameConfig::load(None, None).unwrap();
        assert_eq!(config.size(), 3);
    }

    #[test]
    fn test_file_sets_size() {
        let file = config_file("size = 5\n");
        let config = GameConfig::load(Some(file.path()), None).unwrap();
        assert_eq!(config.size(), 5);
    }

    #[test]
    fn test_empty_file_uses_default() {
        let file = config_file("");
        assert_eq!(GameConfig::from_file(file.path()).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flag_overrides_file() {
        let file = config_file("size = 5\n");
        let config = GameConfig::load(Some(file.path()), Some(4)).unwrap();
        assert_eq!(config.size(), 4);
    }

    #[test]
    fn test_out_of_range_sizes_rejected() {
        assert!(GameConfig::load(None, Some(0)).is_err());
        assert!(GameConfig::load(None, Some(MAX_SIZE + 1)).is_err());
        assert!(GameConfig::load(None, Some(MAX_SIZE)).is_ok());
    }

    #[test]
    fn test_bad_file_reports_parse_error() {
        let file = config_file("size = \"big\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_error_records_validation_site() {
        let err = GameConfig::new(0).validate().unwrap_err();
        assert!(err.file.ends_with("config.rs"), "{}", err.file);
        assert!(err.line > 0);
        assert!(err.to_string().starts_with("Config error: Board size must be between 1 and 10"));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let err = GameConfig::from_file("/nonexistent/tictactoe.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}

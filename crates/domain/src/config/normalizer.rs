use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;

const LOCAL_CONFIG_PATH: &str = "ferrous-zone.toml";

/// What a normalization pass does when a record fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Stop at the first offending record.
    #[default]
    FailFast,

    /// Keep going and report every offending record.
    Collect,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub error_mode: ErrorMode,

    /// TTL given to records that arrive without one.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Whether an import pseudo-record's TTL replaces the TTL of the records it imports.
    #[serde(default = "default_true")]
    pub import_ttl_override: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::default(),
            default_ttl: default_ttl(),
            import_ttl_override: true,
        }
    }
}

impl NormalizerConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-zone.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_ttl == 0 {
            return Err(ConfigError::Validation(
                "default_ttl cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_ttl() -> u32 {
    300
}

fn default_true() -> bool {
    true
}

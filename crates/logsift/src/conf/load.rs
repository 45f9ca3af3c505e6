//! Load: config loading from file and environment variables.

use std::path::Path;

use super::error::ConfigError;
use super::model::AnalyzerConfig;

pub const CONFIG_FILE_ENV: &str = "LOGSIFT_CONFIG_FILE";
pub const CONTEXT_LINES_ENV: &str = "LOGSIFT_CONTEXT_LINES";
pub const MAX_ERRORS_ENV: &str = "LOGSIFT_MAX_ERRORS";

impl AnalyzerConfig {
    /// Load configuration from file and environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if Path::new(&path).exists() => {
                tracing::info!(path = %path, "loading configuration");
                let mut config = Self::from_file(&path)?;
                config.apply_overrides(|key| std::env::var(key).ok())?;
                config
            }
            Ok(path) => {
                return Err(ConfigError::Invalid(format!(
                    "{} points to {}, which does not exist",
                    CONFIG_FILE_ENV, path
                )));
            }
            Err(_) => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`. A value that is present but does not
    /// parse is an error, never a silent fallback to the default.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(CONTEXT_LINES_ENV) {
            self.context_lines = parse_count(CONTEXT_LINES_ENV, &value)?;
        }
        if let Some(value) = lookup(MAX_ERRORS_ENV) {
            self.max_errors = parse_count(MAX_ERRORS_ENV, &value)?;
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| {
        ConfigError::Invalid(format!("{} must be a non-negative integer, got `{}`", key, value))
    })
}

//! Optional CLI configuration file
//!
//! Commands read defaults from a TOML file (by default `ratecast.toml` in
//! the working directory). A missing file falls back to built-in defaults;
//! a malformed file is an error.

use serde::Deserialize;
use std::path::Path;

use ratecast_forecast::{ModelKind, DEFAULT_STEPS};

use crate::{CliError, Result};

/// Defaults applied when a command flag is absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Horizon length used by `forecast` when `--steps` is absent.
    pub default_steps: usize,
    /// Model used by `forecast` when `--model` is absent.
    pub default_model: ModelKind,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_steps: DEFAULT_STEPS,
            default_model: ModelKind::default(),
        }
    }
}

impl CliConfig {
    /// Load the configuration, tolerating a missing file.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = CliConfig::load("/nonexistent/ratecast.toml").unwrap();
        assert_eq!(config.default_steps, 30);
        assert_eq!(config.default_model, ModelKind::Arima);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_steps = 7").unwrap();

        let config = CliConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.default_steps, 7);
        assert_eq!(config.default_model, ModelKind::Arima);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_steps = \"lots\"").unwrap();

        let result = CliConfig::load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

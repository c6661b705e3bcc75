//! Server configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and
//! CLI arguments with the precedence CLI > environment > file > defaults.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid theme: {0}. Must be one of: glass, midnight, light, terminal, corporate, minimal")]
    InvalidTheme(String),

    #[error("Invalid forecast steps: {0}. Must be at least 1")]
    InvalidSteps(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Dashboard theme served to the front-end.
///
/// The front-end is one configurable page; the theme replaces what used to
/// be per-theme page copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Glassmorphism cards on a blurred backdrop (the original look).
    #[default]
    Glass,
    /// Dark navy with high-contrast accents.
    Midnight,
    /// Plain light background.
    Light,
    /// Monospace green-on-black.
    Terminal,
    /// Muted corporate palette.
    Corporate,
    /// Borderless minimal layout.
    Minimal,
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "glass" => Ok(Theme::Glass),
            "midnight" => Ok(Theme::Midnight),
            "light" => Ok(Theme::Light),
            "terminal" => Ok(Theme::Terminal),
            "corporate" => Ok(Theme::Corporate),
            "minimal" => Ok(Theme::Minimal),
            _ => Err(ConfigError::InvalidTheme(s.to_string())),
        }
    }
}

impl Theme {
    /// All available themes, in presentation order.
    pub fn all() -> [Theme; 6] {
        [
            Theme::Glass,
            Theme::Midnight,
            Theme::Light,
            Theme::Terminal,
            Theme::Corporate,
            Theme::Minimal,
        ]
    }

    /// Wire identifier for the theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Glass => "glass",
            Theme::Midnight => "midnight",
            Theme::Light => "light",
            Theme::Terminal => "terminal",
            Theme::Corporate => "corporate",
            Theme::Minimal => "minimal",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Server configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Dashboard theme
    #[serde(deserialize_with = "deserialize_theme")]
    pub theme: Theme,
    /// Default forecast horizon when a request omits `steps`
    pub default_steps: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_theme<'de, D>(deserializer: D) -> Result<Theme, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Theme::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: LogLevel::Info,
            theme: Theme::Glass,
            default_steps: ratecast_forecast::DEFAULT_STEPS,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("RATECAST_SERVER_HOST") {
            config.host = host;
        }
        if let Ok(port_str) = std::env::var("RATECAST_SERVER_PORT") {
            config.port = port_str.parse().map_err(|_| ConfigError::InvalidPort(0))?;
        }
        if let Ok(log_level) = std::env::var("RATECAST_LOG_LEVEL") {
            config.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Ok(theme) = std::env::var("RATECAST_THEME") {
            config.theme = Theme::from_str(&theme)?;
        }
        if let Ok(steps_str) = std::env::var("RATECAST_DEFAULT_STEPS") {
            config.default_steps = steps_str
                .parse()
                .map_err(|_| ConfigError::InvalidSteps(0))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        if self.default_steps == 0 {
            return Err(ConfigError::InvalidSteps(self.default_steps));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            if let Ok(level) = LogLevel::from_str(log_level) {
                self.log_level = level;
            }
        }
        if let Some(theme) = &cli.theme {
            if let Ok(theme) = Theme::from_str(theme) {
                self.theme = theme;
            }
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Host address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
    /// Theme override
    pub theme: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        ServerConfig::from_file(config_path)?
    } else {
        ServerConfig::default()
    };

    match ServerConfig::from_env() {
        Ok(env_config) => {
            if std::env::var("RATECAST_SERVER_HOST").is_ok() {
                config.host = env_config.host;
            }
            if std::env::var("RATECAST_SERVER_PORT").is_ok() {
                config.port = env_config.port;
            }
            if std::env::var("RATECAST_LOG_LEVEL").is_ok() {
                config.log_level = env_config.log_level;
            }
            if std::env::var("RATECAST_THEME").is_ok() {
                config.theme = env_config.theme;
            }
            if std::env::var("RATECAST_DEFAULT_STEPS").is_ok() {
                config.default_steps = env_config.default_steps;
            }
        }
        Err(e) => {
            // Lower-precedence layer: skipped, not fatal.
            tracing::warn!(error = %e, "Ignoring invalid environment configuration");
        }
    }

    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

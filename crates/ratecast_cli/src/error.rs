//! CLI error types

use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// # Variants
///
/// * `FileNotFound` - An input path does not exist
/// * `InvalidArgument` - A flag value is outside the supported set
/// * `Ingest` - CSV reading or cleaning failed
/// * `Forecast` - Model fitting or prediction failed
/// * `Config` - The optional `ratecast.toml` could not be parsed
/// * `Io` - Underlying filesystem failure
#[derive(Debug, Error)]
pub enum CliError {
    /// An input path does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// A flag value is outside the supported set
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// CSV reading or cleaning failed
    #[error("ingest error: {0}")]
    Ingest(#[from] ratecast_ingest::IngestError),

    /// Model fitting or prediction failed
    #[error("forecast error: {0}")]
    Forecast(#[from] ratecast_forecast::ForecastError),

    /// The configuration file could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// Underlying filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

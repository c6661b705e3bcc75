//! Ratecast CLI - Command Line Operations for Rate Forecasting
//!
//! Operational entry point for the ratecast pipeline.
//!
//! # Commands
//!
//! - `ratecast clean --input <file>` - Clean a raw CSV series
//! - `ratecast forecast --input <file>` - Fit a model and print the horizon
//! - `ratecast shock --input <file> --scenario <label>` - Shift dated values
//! - `ratecast check` - Verify the pipeline on a built-in sample

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::CliConfig;

/// Ratecast rate-forecasting CLI
#[derive(Parser)]
#[command(name = "ratecast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "ratecast.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw CSV series (sort by date, parse cells)
    Clean {
        /// Path to CSV file with date and rate columns
        #[arg(short, long)]
        input: String,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Fit a model and print the forecast horizon
    Forecast {
        /// Path to CSV file with date and rate columns
        #[arg(short, long)]
        input: String,

        /// Model to fit (arima, windowed-regression)
        #[arg(short, long)]
        model: Option<String>,

        /// Number of forecast steps
        #[arg(short, long)]
        steps: Option<usize>,

        /// Shock scenario applied to the horizon (e.g. "+50bps")
        #[arg(long)]
        scenario: Option<String>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Apply a shock scenario to a two-column CSV of dated values
    Shock {
        /// Path to CSV file with date and value columns
        #[arg(short, long)]
        input: String,

        /// Scenario label (e.g. "+50bps", "+100bps", "-50bps")
        #[arg(short, long)]
        scenario: String,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check the pipeline and list models and scenarios
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Clean { input, format } => commands::clean::run(&input, &format),
        Commands::Forecast {
            input,
            model,
            steps,
            scenario,
            format,
        } => commands::forecast::run(
            &input,
            model.as_deref(),
            steps,
            scenario.as_deref(),
            &config,
            &format,
        ),
        Commands::Shock {
            input,
            scenario,
            format,
        } => commands::shock::run(&input, &scenario, &format),
        Commands::Check => commands::check::run(),
    }
}

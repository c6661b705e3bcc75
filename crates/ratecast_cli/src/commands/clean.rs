//! Clean command implementation
//!
//! Reads a raw CSV file and prints the cleaned series.

use tracing::info;

use ratecast_core::RateSeries;
use ratecast_ingest::{clean, read_csv_path};

use super::{render_csv, render_table, OutputFormat};
use crate::{CliError, Result};

/// Run the clean command
pub fn run(input: &str, format: &str) -> Result<()> {
    let format = OutputFormat::parse(format)?;

    if !std::path::Path::new(input).exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    let table = read_csv_path(input)?;
    let series = clean(&table)?;
    info!(rows = series.len(), "Cleaned input series");

    println!("{}", render(&series, format)?);
    Ok(())
}

fn render(series: &RateSeries, format: OutputFormat) -> Result<String> {
    let rows: Vec<(String, f64)> = series
        .points()
        .iter()
        .map(|p| (p.date.to_string(), p.rate))
        .collect();

    Ok(match format {
        OutputFormat::Table => render_table("Rate", &rows),
        OutputFormat::Csv => render_csv("rate", &rows),
        OutputFormat::Json => serde_json::to_string_pretty(series.points())
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?,
    })
}

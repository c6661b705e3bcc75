//! Shock command implementation
//!
//! Applies a parallel-shift scenario to a two-column CSV of dated values
//! (typically a previously exported forecast) and prints the result.

use tracing::{info, warn};

use ratecast_core::RateSeries;
use ratecast_ingest::{clean, read_csv_path};
use ratecast_risk::ShockScenario;

use super::{render_csv, render_table, OutputFormat};
use crate::{CliError, Result};

/// Run the shock command
pub fn run(input: &str, scenario: &str, format: &str) -> Result<()> {
    let format = OutputFormat::parse(format)?;

    if !std::path::Path::new(input).exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    if ShockScenario::from_label(scenario).is_none() {
        warn!(label = scenario, "Unknown scenario, applying no shift");
    }
    let shock = ShockScenario::resolve(scenario);

    let table = read_csv_path(input)?;
    let series = clean(&table)?;
    let shifted = shock.apply_to_rates(&series);
    info!(
        scenario = shock.label(),
        offset = shock.offset(),
        rows = shifted.len(),
        "Applied shock"
    );

    println!("{}", render(&shifted, format)?);
    Ok(())
}

fn render(series: &RateSeries, format: OutputFormat) -> Result<String> {
    let rows: Vec<(String, f64)> = series
        .points()
        .iter()
        .map(|p| (p.date.to_string(), p.rate))
        .collect();

    Ok(match format {
        OutputFormat::Table => render_table("Shocked", &rows),
        OutputFormat::Csv => render_csv("value", &rows),
        OutputFormat::Json => serde_json::to_string_pretty(series.points())
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,value").unwrap();
        writeln!(file, "2024-01-01,2.5").unwrap();
        writeln!(file, "2024-01-02,2.6").unwrap();
        file
    }

    #[test]
    fn test_run_known_scenario() {
        let file = sample_file();
        run(file.path().to_str().unwrap(), "+100bps", "csv").unwrap();
    }

    #[test]
    fn test_run_unknown_scenario_is_identity() {
        let file = sample_file();
        run(file.path().to_str().unwrap(), "+9000bps", "table").unwrap();
    }

    #[test]
    fn test_render_reflects_shift() {
        let table =
            ratecast_ingest::read_csv_str("date,value\n2024-01-01,2.5\n").unwrap();
        let series = clean(&table).unwrap();
        let shifted = ShockScenario::Plus50bps.apply_to_rates(&series);

        let out = render(&shifted, OutputFormat::Csv).unwrap();
        assert_eq!(out, "date,value\n2024-01-01,3\n");
    }

    #[test]
    fn test_run_missing_file() {
        let result = run("/nonexistent/forecast.csv", "+50bps", "table");
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}

//! Forecast command implementation
//!
//! Cleans a CSV file, fits the selected model and prints the horizon,
//! optionally shifted by a shock scenario.

use tracing::info;

use ratecast_core::ForecastSeries;
use ratecast_forecast::{forecast_rates, ForecastSpec, ModelKind};
use ratecast_ingest::{clean, read_csv_path};
use ratecast_risk::ShockScenario;

use super::{render_csv, render_table, OutputFormat};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the forecast command
pub fn run(
    input: &str,
    model: Option<&str>,
    steps: Option<usize>,
    scenario: Option<&str>,
    config: &CliConfig,
    format: &str,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;

    if !std::path::Path::new(input).exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    let model = match model {
        Some(name) => name
            .parse::<ModelKind>()
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?,
        None => config.default_model,
    };
    let steps = steps.unwrap_or(config.default_steps);

    let table = read_csv_path(input)?;
    let series = clean(&table)?;
    info!(rows = series.len(), model = model.name(), steps, "Fitting");

    let spec = ForecastSpec::default().with_model(model).with_steps(steps);
    let mut horizon = forecast_rates(&series, &spec)?;

    if let Some(label) = scenario {
        let shock = ShockScenario::resolve(label);
        info!(scenario = shock.label(), offset = shock.offset(), "Applying shock");
        horizon = shock.apply_to_forecast(&horizon);
    }

    println!("{}", render(&horizon, format)?);
    Ok(())
}

fn render(horizon: &ForecastSeries, format: OutputFormat) -> Result<String> {
    let rows: Vec<(String, f64)> = horizon
        .points()
        .iter()
        .map(|p| (p.date.to_string(), p.value))
        .collect();

    Ok(match format {
        OutputFormat::Table => render_table("Forecast", &rows),
        OutputFormat::Csv => render_csv("value", &rows),
        OutputFormat::Json => serde_json::to_string_pretty(horizon.points())
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,rate").unwrap();
        for (i, rate) in [3.0, 3.1, 3.05, 3.2, 3.15, 3.3, 3.25, 3.4]
            .iter()
            .enumerate()
        {
            writeln!(file, "2024-01-{:02},{}", i + 1, rate).unwrap();
        }
        file
    }

    #[test]
    fn test_run_defaults() {
        let file = sample_file();
        let config = CliConfig::default();
        run(file.path().to_str().unwrap(), None, None, None, &config, "csv").unwrap();
    }

    #[test]
    fn test_run_with_explicit_model_and_shock() {
        let file = sample_file();
        let config = CliConfig::default();
        run(
            file.path().to_str().unwrap(),
            Some("arima"),
            Some(5),
            Some("+50bps"),
            &config,
            "table",
        )
        .unwrap();
    }

    #[test]
    fn test_run_rejects_unknown_model() {
        let file = sample_file();
        let config = CliConfig::default();
        let result = run(
            file.path().to_str().unwrap(),
            Some("prophet"),
            None,
            None,
            &config,
            "table",
        );
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_run_missing_file() {
        let config = CliConfig::default();
        let result = run("/nonexistent/rates.csv", None, None, None, &config, "table");
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}

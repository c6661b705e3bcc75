//! Check command implementation
//!
//! Verifies the pipeline end-to-end on a built-in sample series and prints
//! the available models and scenarios.

use tracing::info;

use ratecast_forecast::{forecast_rates, ForecastSpec, ModelKind};
use ratecast_ingest::{clean, read_csv_str};
use ratecast_risk::ShockScenario;

use crate::Result;

const SAMPLE_CSV: &str = "date,rate\n\
    2024-01-01,3.0\n\
    2024-01-02,3.1\n\
    2024-01-03,3.05\n\
    2024-01-04,3.2\n\
    2024-01-05,3.15\n\
    2024-01-06,3.3\n";

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking pipeline on built-in sample...");

    let table = read_csv_str(SAMPLE_CSV)?;
    let series = clean(&table)?;
    let spec = ForecastSpec::default()
        .with_model(ModelKind::Arima)
        .with_steps(5);
    let horizon = forecast_rates(&series, &spec)?;
    let shocked = ShockScenario::Plus50bps.apply_to_forecast(&horizon);

    println!("ratecast {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Pipeline: ok ({} sample forecast steps)", shocked.len());
    println!();
    println!("Models:");
    for kind in [ModelKind::Arima, ModelKind::WindowedRegression] {
        println!("  - {}", kind.name());
    }
    println!();
    println!("Scenarios:");
    for scenario in ShockScenario::all() {
        println!("  - {:<10} ({:+.2})", scenario.label(), scenario.offset());
    }

    Ok(())
}

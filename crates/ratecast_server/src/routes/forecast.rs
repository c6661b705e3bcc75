//! Forecasting endpoint
//!
//! Accepts raw CSV, cleans it, fits the requested model and returns the
//! extrapolated horizon. The default model and step count come from the
//! server configuration.

use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};

use ratecast_core::ForecastPoint;
use ratecast_forecast::{forecast_rates, ForecastSpec, ModelKind};
use ratecast_ingest::{clean, read_csv_str};

use super::{forecast_error, ingest_error, ApiError, AppState};

/// Request body for forecasting
#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    /// Raw CSV text, headers included.
    pub csv: String,
    /// Model selection; defaults to ARIMA when absent.
    #[serde(default)]
    pub model: Option<ModelKind>,
    /// Horizon length; defaults to the configured step count.
    #[serde(default)]
    pub steps: Option<usize>,
}

/// Response body for forecasting
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    /// Model that produced the horizon.
    pub model: String,
    /// Number of forecast steps.
    pub steps: usize,
    /// Forecast points in ascending date order.
    pub points: Vec<ForecastPoint>,
}

/// Build forecast routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/forecast", post(forecast_handler))
}

async fn forecast_handler(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let table = read_csv_str(&request.csv).map_err(ingest_error)?;
    let series = clean(&table).map_err(ingest_error)?;

    let model = request.model.unwrap_or_default();
    let steps = request.steps.unwrap_or(state.config.default_steps);
    let spec = ForecastSpec::default().with_model(model).with_steps(steps);

    let horizon = forecast_rates(&series, &spec).map_err(forecast_error)?;

    Ok(Json(ForecastResponse {
        model: model.name().to_string(),
        steps: horizon.len(),
        points: horizon.points().to_vec(),
    }))
}

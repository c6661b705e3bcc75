//! Route modules for the ratecast server
//!
//! Endpoint groups:
//! - health: health check and readiness endpoints
//! - theme: the configured dashboard theme
//! - series: CSV preprocessing
//! - forecast: model fitting and extrapolation
//! - shock: scenario listing and application

pub mod forecast;
pub mod health;
pub mod series;
pub mod shock;
pub mod theme;

use axum::http::StatusCode;
use axum::response::Json;
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ratecast_forecast::ForecastError;
use ratecast_ingest::IngestError;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Structured error body returned by every failing handler.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Short error category.
    pub error: String,
    /// Human-readable detail.
    pub detail: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: detail.into(),
        }
    }
}

/// Handler error type: status code plus structured body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Maps ingestion failures: schema problems are the client's request shape
/// (400), cell-level parse failures are unprocessable content (422).
pub fn ingest_error(err: IngestError) -> ApiError {
    let status = if err.is_schema() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    let kind = if err.is_schema() { "schema" } else { "parse" };
    (status, Json(ErrorResponse::new(kind, err.to_string())))
}

/// Maps forecasting failures: input-dependent failures are unprocessable
/// content (422), internal states are 500.
pub fn forecast_error(err: ForecastError) -> ApiError {
    let status = match err {
        ForecastError::InsufficientData { .. }
        | ForecastError::NonFiniteInput { .. }
        | ForecastError::InvalidOrder { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ForecastError::NotFitted | ForecastError::Degenerate(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new("forecast", err.to_string())))
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(theme::routes())
        .merge(series::routes())
        .merge(forecast::routes())
        .merge(shock::routes())
        // The dashboard front-end is served from a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

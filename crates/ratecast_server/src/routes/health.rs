//! Health check and readiness endpoints

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::AppState;
use crate::VERSION;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Server version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Component checks
    pub checks: HealthChecks,
}

/// Individual component health checks
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    /// CSV ingestion pipeline available
    pub ingest: bool,
    /// Forecasting models available
    pub forecast: bool,
    /// Shock scenarios available
    pub shock: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Whether the server is ready to accept requests
    pub ready: bool,
}

/// Build health check routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = state.start_time.elapsed().as_secs();

    // All components are in-process; they are healthy whenever the server is.
    let checks = HealthChecks {
        ingest: true,
        forecast: true,
        shock: true,
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
        uptime_seconds: uptime,
        checks,
    })
}

async fn ready_handler() -> Json<ReadyResponse> {
    Json(ReadyResponse { ready: true })
}

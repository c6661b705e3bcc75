//! Shock scenario endpoints
//!
//! Lists the supported parallel-shift scenarios and applies one to a
//! forecast horizon. Unknown scenario labels resolve to the identity
//! scenario rather than failing, so a stale frontend never breaks.

use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use ratecast_core::ForecastPoint;
use ratecast_risk::ShockScenario;

use super::AppState;

/// One scenario in the listing response
#[derive(Debug, Serialize)]
pub struct ScenarioEntry {
    /// Display label, e.g. "+50bps".
    pub label: String,
    /// Additive offset in rate units.
    pub offset: f64,
}

/// Request body for shock application
#[derive(Debug, Deserialize)]
pub struct ShockRequest {
    /// Forecast points to shift.
    pub points: Vec<ForecastPoint>,
    /// Scenario label; unknown labels apply no shift.
    pub scenario: String,
}

/// Response body for shock application
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockResponse {
    /// Resolved scenario label.
    pub scenario: String,
    /// Whether the requested label matched a known scenario.
    pub recognized: bool,
    /// Additive offset that was applied.
    pub offset: f64,
    /// Shifted points.
    pub points: Vec<ForecastPoint>,
}

/// Build shock routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/shock/scenarios", get(scenarios_handler))
        .route("/api/v1/shock", post(shock_handler))
}

async fn scenarios_handler() -> Json<Vec<ScenarioEntry>> {
    let entries = ShockScenario::all()
        .iter()
        .map(|s| ScenarioEntry {
            label: s.label().to_string(),
            offset: s.offset(),
        })
        .collect();
    Json(entries)
}

async fn shock_handler(Json(request): Json<ShockRequest>) -> Json<ShockResponse> {
    let recognized = ShockScenario::from_label(&request.scenario).is_some();
    let scenario = ShockScenario::resolve(&request.scenario);
    let offset = scenario.offset();

    let points = request
        .points
        .into_iter()
        .map(|p| ForecastPoint {
            date: p.date,
            value: p.value + offset,
        })
        .collect();

    Json(ShockResponse {
        scenario: scenario.label().to_string(),
        recognized,
        offset,
        points,
    })
}

//! CSV preprocessing endpoint

use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};

use ratecast_core::RatePoint;
use ratecast_ingest::{clean, read_csv_str};

use super::{ingest_error, ApiError, AppState};

/// Request body for series cleaning
#[derive(Debug, Deserialize)]
pub struct CleanRequest {
    /// Raw CSV text, headers included.
    pub csv: String,
}

/// Response body for series cleaning
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanResponse {
    /// Number of observations after cleaning.
    pub count: usize,
    /// Cleaned observations in ascending date order.
    pub points: Vec<RatePoint>,
}

/// Build series routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/series/clean", post(clean_handler))
}

async fn clean_handler(
    Json(request): Json<CleanRequest>,
) -> Result<Json<CleanResponse>, ApiError> {
    let table = read_csv_str(&request.csv).map_err(ingest_error)?;
    let series = clean(&table).map_err(ingest_error)?;

    Ok(Json(CleanResponse {
        count: series.len(),
        points: series.points().to_vec(),
    }))
}

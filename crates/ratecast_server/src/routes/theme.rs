//! Dashboard theme endpoint
//!
//! Exposes the configured visual theme so a frontend can style itself
//! without a separate configuration channel.

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::AppState;
use crate::config::Theme;

/// Theme response
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    /// The configured theme name
    pub theme: String,
    /// All available theme names
    pub available: Vec<String>,
}

/// Build theme routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/theme", get(theme_handler))
}

async fn theme_handler(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: state.config.theme.as_str().to_string(),
        available: Theme::all()
            .iter()
            .map(|t| t.as_str().to_string())
            .collect(),
    })
}

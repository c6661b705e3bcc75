//! Integration tests for the full API flow.
//!
//! Drives the router end-to-end the way a dashboard front-end would:
//! clean an uploaded CSV, forecast from it, then apply a shock scenario
//! to the returned horizon.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use ratecast_server::config::ServerConfig;
use ratecast_server::routes::build_router;

fn router() -> Router {
    build_router(Arc::new(ServerConfig::default()))
}

async fn post_json(
    router: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

const SAMPLE_CSV: &str = "date,rate\n\
    2024-01-03,3.05\n\
    2024-01-01,3.0\n\
    2024-01-02,3.1\n\
    2024-01-04,3.2\n\
    2024-01-05,3.15\n\
    2024-01-06,3.3\n";

#[tokio::test]
async fn clean_then_forecast_then_shock() {
    // 1. Clean the raw upload.
    let (status, cleaned) = post_json(
        router(),
        "/api/v1/series/clean",
        serde_json::json!({ "csv": SAMPLE_CSV }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleaned["count"], 6);
    assert_eq!(cleaned["points"][0]["date"], "2024-01-01");
    assert_eq!(cleaned["points"][5]["date"], "2024-01-06");

    // 2. Forecast a short horizon from the same upload.
    let (status, forecast) = post_json(
        router(),
        "/api/v1/forecast",
        serde_json::json!({ "csv": SAMPLE_CSV, "steps": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(forecast["model"], "arima");
    assert_eq!(forecast["steps"], 4);
    let points = forecast["points"].as_array().unwrap();
    assert_eq!(points.len(), 4);
    assert_eq!(points[0]["date"], "2024-01-07");
    for p in points {
        assert!(p["value"].as_f64().unwrap().is_finite());
    }

    // 3. Shift the horizon by +100bps.
    let (status, shocked) = post_json(
        router(),
        "/api/v1/shock",
        serde_json::json!({ "points": forecast["points"], "scenario": "+100bps" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shocked["recognized"], true);
    assert_eq!(shocked["offset"], 1.0);

    let before = points;
    let after = shocked["points"].as_array().unwrap();
    for (b, a) in before.iter().zip(after) {
        assert_eq!(a["date"], b["date"]);
        let delta = a["value"].as_f64().unwrap() - b["value"].as_f64().unwrap();
        assert!((delta - 1.0).abs() < 1e-12);
    }
}

#[tokio::test]
async fn forecast_rejects_short_series() {
    let (status, body) = post_json(
        router(),
        "/api/v1/forecast",
        serde_json::json!({ "csv": "date,rate\n2024-01-01,3.0\n2024-01-02,3.1\n" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "forecast");
}

#[tokio::test]
async fn clean_rejects_single_column() {
    let (status, body) = post_json(
        router(),
        "/api/v1/series/clean",
        serde_json::json!({ "csv": "date\n2024-01-01\n" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "schema");
}

//! Ratecast Server
//!
//! REST API exposing the interest-rate forecasting pipeline:
//! CSV preprocessing, fixed-order ARIMA forecasting, and shock scenarios.
//! The presentation layer is a single configurable front-end parameterized
//! by [`config::Theme`]; this crate serves the data it charts.

pub mod config;
pub mod routes;
pub mod server;

/// Server version, from the crate metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

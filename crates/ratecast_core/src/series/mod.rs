//! Series types for observed rates and model forecasts.
//!
//! - `RateSeries`: observed (date, rate) pairs, sorted ascending on
//!   construction and immutable thereafter.
//! - `ForecastSeries`: synthetic (date, value) pairs produced by a
//!   forecaster, disjoint in meaning from observations.

mod forecast_series;
mod rate_series;

pub use forecast_series::{ForecastPoint, ForecastSeries};
pub use rate_series::{RatePoint, RateSeries};

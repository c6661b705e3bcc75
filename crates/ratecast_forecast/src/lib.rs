//! # ratecast_forecast: Rate Series Forecasting
//!
//! Model layer of the ratecast pipeline. Two implementations of a common
//! [`Forecaster`] capability:
//!
//! - [`Arima`]: the production path. Fixed-order ARIMA with differencing,
//!   Yule-Walker AR estimation, and residual-autocorrelation MA estimation.
//!   The dashboard default is ARIMA(2,1,2) with a 30-step horizon; orders
//!   are configured, never inferred (no stationarity test, no order search).
//! - [`WindowedRegression`]: an alternative windowed least-squares model
//!   (window 30). Selected only by explicit configuration, never silently.
//!
//! Dispatch is by the static [`ForecastModel`] enum; the top-level entry
//! point is [`forecast_rates`], which fits, predicts, and dates the horizon
//! from the input's cadence.
//!
//! ```
//! use ratecast_core::series::{RatePoint, RateSeries};
//! use ratecast_core::types::Date;
//! use ratecast_forecast::{forecast_rates, ForecastSpec};
//!
//! let points = (1..=10)
//!     .map(|d| RatePoint::new(Date::from_ymd(2023, 1, d).unwrap(), 2.0 + d as f64 * 0.01))
//!     .collect();
//! let series = RateSeries::from_points(points);
//!
//! let forecast = forecast_rates(&series, &ForecastSpec::default()).unwrap();
//! assert_eq!(forecast.len(), 30);
//! ```

mod arima;
mod error;
mod forecaster;
mod model;
mod pipeline;
mod window;

pub use arima::{Arima, ArimaOrder};
pub use error::ForecastError;
pub use forecaster::Forecaster;
pub use model::{ForecastModel, ModelKind};
pub use pipeline::{forecast_rates, ForecastSpec, DEFAULT_STEPS};
pub use window::WindowedRegression;

//! Top-level forecast entry point: series in, dated horizon out.

use ratecast_core::series::{ForecastSeries, RateSeries};

use crate::arima::ArimaOrder;
use crate::error::ForecastError;
use crate::forecaster::Forecaster;
use crate::model::{ForecastModel, ModelKind};
use crate::window::DEFAULT_WINDOW;

/// Default forecast horizon length.
pub const DEFAULT_STEPS: usize = 30;

/// Forecast request parameters.
///
/// The defaults reproduce the dashboard's fixed call: ARIMA(2,1,2),
/// 30 steps.
///
/// # Examples
///
/// ```
/// use ratecast_forecast::{ForecastSpec, ModelKind};
///
/// let spec = ForecastSpec::default();
/// assert_eq!(spec.model, ModelKind::Arima);
/// assert_eq!(spec.steps, 30);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ForecastSpec {
    /// Which forecaster to use.
    pub model: ModelKind,
    /// ARIMA order (consulted only by the ARIMA variant).
    pub order: ArimaOrder,
    /// Window width (consulted only by the windowed-regression variant).
    pub window: usize,
    /// Number of forecast steps.
    pub steps: usize,
}

impl Default for ForecastSpec {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            order: ArimaOrder::default(),
            window: DEFAULT_WINDOW,
            steps: DEFAULT_STEPS,
        }
    }
}

impl ForecastSpec {
    /// Overrides the horizon length.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Overrides the model selection.
    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.model = model;
        self
    }
}

/// Fits the configured model to `series` and extrapolates `spec.steps`
/// points onto a dated horizon.
///
/// Horizon dates extend the series' last observation date by one cadence
/// step per point, where the cadence is the day gap between the last two
/// observations (1 day for a single-point series). Errors from fitting
/// (insufficient or non-finite data) propagate unchanged; nothing here is
/// retried or caught.
///
/// # Examples
///
/// ```
/// use ratecast_core::series::{RatePoint, RateSeries};
/// use ratecast_core::types::Date;
/// use ratecast_forecast::{forecast_rates, ForecastSpec};
///
/// let points = (1..=6)
///     .map(|d| RatePoint::new(Date::from_ymd(2023, 1, d).unwrap(), 2.0 + d as f64 * 0.05))
///     .collect();
/// let series = RateSeries::from_points(points);
/// let forecast = forecast_rates(&series, &ForecastSpec::default()).unwrap();
/// assert_eq!(forecast.len(), 30);
/// assert_eq!(forecast.points()[0].date, Date::from_ymd(2023, 1, 7).unwrap());
/// ```
pub fn forecast_rates(
    series: &RateSeries,
    spec: &ForecastSpec,
) -> Result<ForecastSeries, ForecastError> {
    let mut model = ForecastModel::build(spec.model, spec.order, spec.window)?;
    let rates = series.rates();
    model.fit(&rates)?;
    let values = model.predict(spec.steps)?;

    let last = series
        .last()
        .expect("fit requires a non-empty series")
        .date;
    ForecastSeries::from_horizon(last, series.cadence_days(), values)
        .map_err(|e| ForecastError::Degenerate(format!("horizon dating failed: {}", e)))
}

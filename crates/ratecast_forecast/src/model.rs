//! Static dispatch over the available forecasters.
//!
//! `ForecastModel` wraps the concrete models behind a single enum so
//! callers select a model by configuration and dispatch via `match`, with
//! no trait objects on the hot path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arima::{Arima, ArimaOrder};
use crate::error::ForecastError;
use crate::forecaster::Forecaster;
use crate::window::WindowedRegression;

/// Identifier for a forecaster implementation, parsed from configuration.
///
/// # Examples
///
/// ```
/// use ratecast_forecast::ModelKind;
///
/// let kind: ModelKind = "arima".parse().unwrap();
/// assert_eq!(kind, ModelKind::Arima);
/// assert!("prophet".parse::<ModelKind>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// Fixed-order ARIMA (the production default).
    #[default]
    Arima,
    /// Windowed least-squares regression.
    WindowedRegression,
}

impl ModelKind {
    /// Model identifier, matching the configuration spelling.
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Arima => "arima",
            ModelKind::WindowedRegression => "windowed-regression",
        }
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arima" => Ok(ModelKind::Arima),
            "windowed-regression" | "window" => Ok(ModelKind::WindowedRegression),
            other => Err(ForecastError::InvalidOrder {
                name: "model",
                reason: format!(
                    "unknown model {:?}; supported: arima, windowed-regression",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A concrete forecaster selected by configuration.
#[derive(Clone, Debug)]
pub enum ForecastModel {
    /// Fixed-order ARIMA.
    Arima(Arima),
    /// Windowed least-squares regression.
    WindowedRegression(WindowedRegression),
}

impl ForecastModel {
    /// Builds the model for `kind` with the given ARIMA order and window
    /// width (each only consulted by the matching variant).
    pub fn build(
        kind: ModelKind,
        order: ArimaOrder,
        window: usize,
    ) -> Result<Self, ForecastError> {
        match kind {
            ModelKind::Arima => Ok(ForecastModel::Arima(Arima::new(order)?)),
            ModelKind::WindowedRegression => Ok(ForecastModel::WindowedRegression(
                WindowedRegression::new(window)?,
            )),
        }
    }

    /// Which kind of model this is.
    pub fn kind(&self) -> ModelKind {
        match self {
            ForecastModel::Arima(_) => ModelKind::Arima,
            ForecastModel::WindowedRegression(_) => ModelKind::WindowedRegression,
        }
    }
}

impl Forecaster for ForecastModel {
    fn fit(&mut self, data: &[f64]) -> Result<(), ForecastError> {
        match self {
            ForecastModel::Arima(m) => m.fit(data),
            ForecastModel::WindowedRegression(m) => m.fit(data),
        }
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>, ForecastError> {
        match self {
            ForecastModel::Arima(m) => m.predict(steps),
            ForecastModel::WindowedRegression(m) => m.predict(steps),
        }
    }

    fn is_fitted(&self) -> bool {
        match self {
            ForecastModel::Arima(m) => m.is_fitted(),
            ForecastModel::WindowedRegression(m) => m.is_fitted(),
        }
    }

    fn min_observations(&self) -> usize {
        match self {
            ForecastModel::Arima(m) => m.min_observations(),
            ForecastModel::WindowedRegression(m) => m.min_observations(),
        }
    }
}

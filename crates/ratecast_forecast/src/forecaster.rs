//! The forecasting capability seam.

use crate::error::ForecastError;

/// A model that can be fitted to a numeric series and extrapolated.
///
/// Implementations are deterministic given the input series. Fitting
/// validates the input (length, finiteness) and never mutates the series;
/// prediction before a successful fit fails with
/// [`ForecastError::NotFitted`].
pub trait Forecaster {
    /// Fits the model to `data`, replacing any previous fit.
    fn fit(&mut self, data: &[f64]) -> Result<(), ForecastError>;

    /// Produces exactly `steps` point forecasts beyond the fitted series.
    fn predict(&self, steps: usize) -> Result<Vec<f64>, ForecastError>;

    /// Whether `fit` has completed successfully.
    fn is_fitted(&self) -> bool;

    /// Minimum number of observations `fit` will accept.
    fn min_observations(&self) -> usize;
}

/// Shared input validation: length then finiteness.
pub(crate) fn validate_input(data: &[f64], need: usize) -> Result<(), ForecastError> {
    if data.len() < need {
        return Err(ForecastError::InsufficientData {
            got: data.len(),
            need,
        });
    }
    if let Some(index) = data.iter().position(|x| !x.is_finite()) {
        return Err(ForecastError::NonFiniteInput { index });
    }
    Ok(())
}

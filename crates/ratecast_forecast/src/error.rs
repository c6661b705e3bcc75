//! Forecasting error types.

use thiserror::Error;

/// Errors from model construction, fitting, and prediction.
///
/// # Variants
/// - `InvalidOrder`: a model order parameter is out of range
/// - `InsufficientData`: the series is too short to fit
/// - `NonFiniteInput`: the series contains NaN or infinite values
/// - `NotFitted`: prediction requested before a successful fit
/// - `Degenerate`: the fit produced no usable model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// A model order parameter is out of its supported range.
    #[error("Invalid order parameter {name}: {reason}")]
    InvalidOrder {
        /// Parameter name (p, d, q, window).
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Not enough observations to fit the model.
    #[error("Insufficient data: got {got} points, need at least {need}")]
    InsufficientData {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        need: usize,
    },

    /// The series contains a NaN or infinite value.
    #[error("Non-finite value in input series at index {index}")]
    NonFiniteInput {
        /// Index of the first non-finite value.
        index: usize,
    },

    /// Prediction was requested before fitting.
    #[error("Model has not been fitted")]
    NotFitted,

    /// The fit completed but produced no usable model.
    #[error("Degenerate fit: {0}")]
    Degenerate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let err = ForecastError::InsufficientData { got: 3, need: 6 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data: got 3 points, need at least 6"
        );
    }

    #[test]
    fn test_invalid_order_display() {
        let err = ForecastError::InvalidOrder {
            name: "d",
            reason: "must be <= 2".to_string(),
        };
        assert!(format!("{}", err).contains("Invalid order parameter d"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = ForecastError::NonFiniteInput { index: 4 };
        assert_eq!(format!("{}", err), "Non-finite value in input series at index 4");
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = ForecastError::NotFitted;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}

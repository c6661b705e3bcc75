//! Windowed least-squares forecaster.
//!
//! The alternative to [`Arima`](crate::Arima): a one-step-ahead regression
//! trained on sliding windows (default width 30), iterated forward to fill
//! the horizon. Each window contributes two regressors, its last value and
//! its mean; the pair spans both level and within-window trend, so the
//! model is exactly identifiable on trending data. Coefficients come from
//! the 2x2 normal equations. Only reachable through explicit model
//! selection.

use crate::error::ForecastError;
use crate::forecaster::{validate_input, Forecaster};

/// Default window width, matching the dashboard's fixed lookback.
pub const DEFAULT_WINDOW: usize = 30;

const EPS: f64 = 1e-12;

/// One-step-ahead windowed regression, iterated over the horizon.
///
/// # Examples
///
/// ```
/// use ratecast_forecast::{Forecaster, WindowedRegression};
///
/// let data: Vec<f64> = (0..40).map(|i| 2.0 + 0.01 * i as f64).collect();
/// let mut model = WindowedRegression::new(30).unwrap();
/// model.fit(&data).unwrap();
/// assert_eq!(model.predict(10).unwrap().len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct WindowedRegression {
    window: usize,
    // Weights for (window last value, window mean).
    beta: [f64; 2],
    // Set when the windows are collinear (constant series); predicts this
    // value for every step.
    constant_fallback: Option<f64>,
    tail: Vec<f64>,
    fitted: bool,
}

impl WindowedRegression {
    /// Creates an unfitted model with the given window width (>= 2).
    pub fn new(window: usize) -> Result<Self, ForecastError> {
        if window < 2 {
            return Err(ForecastError::InvalidOrder {
                name: "window",
                reason: format!("window must be >= 2, got {}", window),
            });
        }
        Ok(Self {
            window,
            beta: [0.0; 2],
            constant_fallback: None,
            tail: Vec::new(),
            fitted: false,
        })
    }

    /// Creates an unfitted model with the default window of 30.
    pub fn with_default_window() -> Self {
        Self::new(DEFAULT_WINDOW).expect("default window is valid")
    }

    /// The configured window width.
    pub fn window(&self) -> usize {
        self.window
    }

    fn features(window: &[f64]) -> [f64; 2] {
        let last = *window.last().expect("window is non-empty");
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        [last, mean]
    }

    /// Solves the 2x2 normal equations directly. Returns `None` when the
    /// system is singular (collinear regressors).
    fn solve_normal_equations(xtx: [[f64; 2]; 2], xty: [f64; 2]) -> Option<[f64; 2]> {
        let det = xtx[0][0] * xtx[1][1] - xtx[0][1] * xtx[1][0];
        let scale = xtx[0][0].abs().max(xtx[1][1].abs()).max(1.0);
        if det.abs() < EPS * scale * scale {
            return None;
        }
        Some([
            (xty[0] * xtx[1][1] - xty[1] * xtx[0][1]) / det,
            (xty[1] * xtx[0][0] - xty[0] * xtx[1][0]) / det,
        ])
    }
}

impl Forecaster for WindowedRegression {
    fn fit(&mut self, data: &[f64]) -> Result<(), ForecastError> {
        validate_input(data, self.min_observations())?;

        let w = self.window;
        let mut xtx = [[0.0; 2]; 2];
        let mut xty = [0.0; 2];
        let mut target_sum = 0.0;
        let mut samples = 0usize;

        for i in w..data.len() {
            let x = Self::features(&data[i - w..i]);
            let y = data[i];
            for r in 0..2 {
                for c in 0..2 {
                    xtx[r][c] += x[r] * x[c];
                }
                xty[r] += x[r] * y;
            }
            target_sum += y;
            samples += 1;
        }

        match Self::solve_normal_equations(xtx, xty) {
            Some(beta) => {
                self.beta = beta;
                self.constant_fallback = None;
            }
            None => {
                self.beta = [0.0; 2];
                self.constant_fallback = Some(target_sum / samples as f64);
            }
        }
        self.tail = data[data.len() - w..].to_vec();
        self.fitted = true;

        tracing::debug!(
            window = w,
            samples,
            fallback = self.constant_fallback.is_some(),
            "windowed regression fit complete"
        );
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>, ForecastError> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        if let Some(constant) = self.constant_fallback {
            return Ok(vec![constant; steps]);
        }
        let mut window = self.tail.clone();
        let mut forecasts = Vec::with_capacity(steps);
        for _ in 0..steps {
            let x = Self::features(&window);
            let next = self.beta[0] * x[0] + self.beta[1] * x[1];
            forecasts.push(next);
            window.remove(0);
            window.push(next);
        }
        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// One full window plus one target.
    fn min_observations(&self) -> usize {
        self.window + 1
    }
}

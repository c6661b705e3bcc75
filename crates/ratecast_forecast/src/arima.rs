//! Fixed-order ARIMA model.
//!
//! Self-contained estimation, no external optimizer:
//! - **I**: difference the series `d` times, remembering the tail value at
//!   each level for exact undifferencing of forecasts.
//! - **AR**: Yule-Walker equations solved with the Levinson-Durbin
//!   recursion on the biased autocovariance sequence.
//! - **MA**: lag-k autocorrelation of the AR residuals, clamped to the
//!   invertible region.
//!
//! Orders are configured up front and never searched for; the dashboard
//! default is ARIMA(2,1,2).

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::forecaster::{validate_input, Forecaster};

/// MA coefficients are clamped to this magnitude for stability.
const MA_CLAMP: f64 = 0.99;

/// Near-zero guard for variance/innovation denominators.
const EPS: f64 = 1e-12;

/// The (p, d, q) order triple.
///
/// # Examples
///
/// ```
/// use ratecast_forecast::ArimaOrder;
///
/// let order = ArimaOrder::default();
/// assert_eq!((order.p, order.d, order.q), (2, 1, 2));
/// assert_eq!(order.min_observations(), 6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArimaOrder {
    /// Autoregressive lag count.
    pub p: usize,
    /// Differencing order.
    pub d: usize,
    /// Moving-average lag count.
    pub q: usize,
}

impl Default for ArimaOrder {
    /// The dashboard's fixed default: ARIMA(2,1,2).
    fn default() -> Self {
        Self { p: 2, d: 1, q: 2 }
    }
}

impl ArimaOrder {
    /// Creates an order triple, validating each component's range.
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self, ForecastError> {
        let order = Self { p, d, q };
        order.validate()?;
        Ok(order)
    }

    /// Validates component ranges: `p <= 10`, `d <= 2`, `q <= 10`.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.p > 10 {
            return Err(ForecastError::InvalidOrder {
                name: "p",
                reason: format!("AR order must be <= 10, got {}", self.p),
            });
        }
        if self.d > 2 {
            return Err(ForecastError::InvalidOrder {
                name: "d",
                reason: format!("differencing order must be <= 2, got {}", self.d),
            });
        }
        if self.q > 10 {
            return Err(ForecastError::InvalidOrder {
                name: "q",
                reason: format!("MA order must be <= 10, got {}", self.q),
            });
        }
        Ok(())
    }

    /// Minimum observations required to fit: `p + d + q + 1`.
    pub fn min_observations(&self) -> usize {
        self.p + self.d + self.q + 1
    }
}

/// ARIMA(p,d,q) forecaster.
///
/// Deterministic given the input series. Fitting validates length and
/// finiteness; prediction returns exactly the requested number of steps on
/// the original (undifferenced) scale.
///
/// # Examples
///
/// ```
/// use ratecast_forecast::{Arima, ArimaOrder, Forecaster};
///
/// let data: Vec<f64> = (0..20).map(|i| 2.0 + 0.01 * i as f64).collect();
/// let mut model = Arima::new(ArimaOrder::default()).unwrap();
/// model.fit(&data).unwrap();
/// assert_eq!(model.predict(30).unwrap().len(), 30);
/// ```
#[derive(Clone, Debug)]
pub struct Arima {
    order: ArimaOrder,
    ar: Vec<f64>,
    ma: Vec<f64>,
    mean: f64,
    differenced: Vec<f64>,
    residuals: Vec<f64>,
    // Tail of the k-times differenced series for k in 0..d, used to
    // reverse differencing exactly (also for d = 2).
    level_tails: Vec<f64>,
    fitted: bool,
}

impl Arima {
    /// Creates an unfitted model with the given order.
    pub fn new(order: ArimaOrder) -> Result<Self, ForecastError> {
        order.validate()?;
        Ok(Self {
            order,
            ar: Vec::new(),
            ma: Vec::new(),
            mean: 0.0,
            differenced: Vec::new(),
            residuals: Vec::new(),
            level_tails: Vec::new(),
            fitted: false,
        })
    }

    /// Creates an unfitted ARIMA(2,1,2), the dashboard default.
    pub fn with_default_order() -> Self {
        Self::new(ArimaOrder::default()).expect("default order is valid")
    }

    /// The configured order.
    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    /// Estimated AR coefficients (empty before fitting).
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar
    }

    /// Estimated MA coefficients (empty before fitting).
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma
    }

    /// Differences `data` once per level, recording the tail value of each
    /// intermediate level.
    fn difference(&mut self, data: &[f64]) {
        let mut current = data.to_vec();
        self.level_tails.clear();
        for _ in 0..self.order.d {
            self.level_tails.push(*current.last().expect("validated non-empty"));
            let mut next = Vec::with_capacity(current.len().saturating_sub(1));
            for i in 1..current.len() {
                next.push(current[i] - current[i - 1]);
            }
            current = next;
        }
        self.differenced = current;
    }

    /// Reverses `d` levels of differencing over a forecast path.
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for k in (0..self.order.d).rev() {
            let mut running = self.level_tails[k];
            for value in result.iter_mut() {
                running += *value;
                *value = running;
            }
        }
        result
    }

    /// Biased autocovariance of the centered series up to `max_lag`.
    fn autocovariance(centered: &[f64], max_lag: usize) -> Vec<f64> {
        let n = centered.len();
        let mut acov = vec![0.0; max_lag + 1];
        for (k, slot) in acov.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in k..n {
                sum += centered[i] * centered[i - k];
            }
            *slot = sum / n as f64;
        }
        acov
    }

    /// Solves the Yule-Walker equations with the Levinson-Durbin recursion.
    fn levinson_durbin(acov: &[f64], p: usize) -> Vec<f64> {
        let mut phi = vec![0.0; p];
        if p == 0 || acov[0].abs() < EPS {
            return phi;
        }
        let mut innovation = acov[0];
        for k in 0..p {
            let mut acc = acov[k + 1];
            for j in 0..k {
                acc -= phi[j] * acov[k - j];
            }
            let reflection = if innovation.abs() > EPS {
                acc / innovation
            } else {
                0.0
            };
            let prev = phi.clone();
            phi[k] = reflection;
            for j in 0..k {
                phi[j] = prev[j] - reflection * prev[k - 1 - j];
            }
            innovation *= 1.0 - reflection * reflection;
        }
        phi
    }

    /// One-step-ahead AR residuals on the differenced scale.
    fn compute_residuals(&self) -> Vec<f64> {
        let n = self.differenced.len();
        let p = self.order.p;
        let mut residuals = vec![0.0; n];
        for i in p..n {
            let mut prediction = self.mean;
            for (j, coeff) in self.ar.iter().enumerate() {
                prediction += coeff * (self.differenced[i - j - 1] - self.mean);
            }
            residuals[i] = self.differenced[i] - prediction;
        }
        residuals
    }

    /// MA coefficients from the lag-k autocorrelation of the residuals,
    /// clamped to the invertible region.
    fn estimate_ma(&self, residuals: &[f64]) -> Vec<f64> {
        let q = self.order.q;
        if q == 0 || residuals.is_empty() {
            return vec![0.0; q];
        }
        let n = residuals.len();
        let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();
        let variance: f64 = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

        let mut coeffs = vec![0.0; q];
        if variance.abs() < EPS {
            return coeffs;
        }
        for (k, slot) in coeffs.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in (k + 1)..n {
                sum += centered[i] * centered[i - k - 1];
            }
            *slot = ((sum / n as f64) / variance).clamp(-MA_CLAMP, MA_CLAMP);
        }
        coeffs
    }
}

impl Forecaster for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<(), ForecastError> {
        validate_input(data, self.min_observations())?;

        self.difference(data);
        let n = self.differenced.len();
        self.mean = self.differenced.iter().sum::<f64>() / n as f64;

        let centered: Vec<f64> = self.differenced.iter().map(|x| x - self.mean).collect();
        let acov = Self::autocovariance(&centered, self.order.p);
        self.ar = Self::levinson_durbin(&acov, self.order.p);

        self.residuals = self.compute_residuals();
        self.ma = self.estimate_ma(&self.residuals);

        self.fitted = true;
        tracing::debug!(
            p = self.order.p,
            d = self.order.d,
            q = self.order.q,
            n = data.len(),
            mean = self.mean,
            "ARIMA fit complete"
        );
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>, ForecastError> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.differenced.len();
        let mut extended = self.differenced.clone();
        let mut extended_residuals = self.residuals.clone();

        for _ in 0..steps {
            let mut forecast = self.mean;
            for (j, coeff) in self.ar.iter().enumerate() {
                let idx = extended.len() - j - 1;
                forecast += coeff * (extended[idx] - self.mean);
            }
            for (j, coeff) in self.ma.iter().enumerate() {
                if extended_residuals.len() > j {
                    let idx = extended_residuals.len() - j - 1;
                    forecast += coeff * extended_residuals[idx];
                }
            }
            extended.push(forecast);
            // Expected future innovations are zero
            extended_residuals.push(0.0);
        }

        Ok(self.undifference(&extended[n..]))
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn min_observations(&self) -> usize {
        self.order.min_observations()
    }
}

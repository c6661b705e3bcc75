//! Forecast series produced by a fitted model.

use serde::{Deserialize, Serialize};

use crate::types::{Date, DateError};

/// A single forecast point.
///
/// Dates are synthetic: they extend the observed series' date axis, they are
/// not observations.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Synthetic horizon date.
    pub date: Date,
    /// Point forecast value.
    pub value: f64,
}

impl ForecastPoint {
    /// Creates a new forecast point.
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

/// An ordered sequence of point forecasts over a dated horizon.
///
/// Produced via [`ForecastSeries::from_horizon`], which dates each forecast
/// value one cadence step after the previous, starting one step after the
/// observed series' last date.
///
/// # Examples
///
/// ```
/// use ratecast_core::series::ForecastSeries;
/// use ratecast_core::types::Date;
///
/// let last_observed = Date::from_ymd(2023, 1, 6).unwrap();
/// let fc = ForecastSeries::from_horizon(last_observed, 1, vec![2.3, 2.35]).unwrap();
///
/// assert_eq!(fc.len(), 2);
/// assert_eq!(fc.points()[0].date, Date::from_ymd(2023, 1, 7).unwrap());
/// assert_eq!(fc.points()[1].date, Date::from_ymd(2023, 1, 8).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Dates `values` onto a horizon extending `last_observed` by
    /// `cadence_days` per step.
    ///
    /// A zero cadence is coerced to 1 so the horizon always advances.
    pub fn from_horizon(
        last_observed: Date,
        cadence_days: u64,
        values: Vec<f64>,
    ) -> Result<Self, DateError> {
        let step = cadence_days.max(1);
        let mut points = Vec::with_capacity(values.len());
        let mut date = last_observed;
        for value in values {
            date = date.add_days(step)?;
            points.push(ForecastPoint::new(date, value));
        }
        Ok(Self { points })
    }

    /// The ordered forecast points.
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of forecast points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the horizon is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Forecast values in horizon order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Returns a new forecast series with every value shifted by `offset`,
    /// preserving horizon dates exactly.
    pub fn with_offset(&self, offset: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| ForecastPoint::new(p.date, p.value + offset))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_horizon_daily() {
        let last = Date::from_ymd(2023, 1, 6).unwrap();
        let fc = ForecastSeries::from_horizon(last, 1, vec![2.3, 2.35, 2.4]).unwrap();
        assert_eq!(fc.len(), 3);
        assert_eq!(fc.points()[0].date, Date::from_ymd(2023, 1, 7).unwrap());
        assert_eq!(fc.points()[2].date, Date::from_ymd(2023, 1, 9).unwrap());
        assert_eq!(fc.values(), vec![2.3, 2.35, 2.4]);
    }

    #[test]
    fn test_from_horizon_weekly_cadence() {
        let last = Date::from_ymd(2023, 1, 1).unwrap();
        let fc = ForecastSeries::from_horizon(last, 7, vec![1.0, 2.0]).unwrap();
        assert_eq!(fc.points()[0].date, Date::from_ymd(2023, 1, 8).unwrap());
        assert_eq!(fc.points()[1].date, Date::from_ymd(2023, 1, 15).unwrap());
    }

    #[test]
    fn test_from_horizon_zero_cadence_coerced() {
        let last = Date::from_ymd(2023, 1, 1).unwrap();
        let fc = ForecastSeries::from_horizon(last, 0, vec![1.0, 2.0]).unwrap();
        // Horizon still advances one day per step
        assert_eq!(fc.points()[0].date, Date::from_ymd(2023, 1, 2).unwrap());
        assert_eq!(fc.points()[1].date, Date::from_ymd(2023, 1, 3).unwrap());
    }

    #[test]
    fn test_from_horizon_empty() {
        let last = Date::from_ymd(2023, 1, 1).unwrap();
        let fc = ForecastSeries::from_horizon(last, 1, vec![]).unwrap();
        assert!(fc.is_empty());
    }

    #[test]
    fn test_with_offset() {
        let last = Date::from_ymd(2023, 1, 1).unwrap();
        let fc = ForecastSeries::from_horizon(last, 1, vec![2.0, 3.0]).unwrap();
        let shifted = fc.with_offset(-0.5);
        assert_relative_eq!(shifted.values()[0], 1.5);
        assert_relative_eq!(shifted.values()[1], 2.5);
        assert_eq!(shifted.points()[0].date, fc.points()[0].date);
    }
}

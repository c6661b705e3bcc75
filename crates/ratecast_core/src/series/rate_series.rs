//! Observed rate series.

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// A single dated rate observation.
///
/// Rates are plain `f64` percentage points; no unit is enforced by the type.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Observation date (series key).
    pub date: Date,
    /// Observed rate value.
    pub rate: f64,
}

impl RatePoint {
    /// Creates a new observation.
    pub fn new(date: Date, rate: f64) -> Self {
        Self { date, rate }
    }
}

/// An ordered sequence of dated rate observations.
///
/// Points are sorted ascending by date on construction (stable sort, so
/// duplicate dates keep their input order; duplicates are NOT deduplicated)
/// and the collection is immutable afterwards. Derived transformations
/// produce new series rather than mutating this one.
///
/// # Examples
///
/// ```
/// use ratecast_core::series::{RatePoint, RateSeries};
/// use ratecast_core::types::Date;
///
/// let series = RateSeries::from_points(vec![
///     RatePoint::new(Date::from_ymd(2023, 1, 3).unwrap(), 2.05),
///     RatePoint::new(Date::from_ymd(2023, 1, 1).unwrap(), 2.0),
///     RatePoint::new(Date::from_ymd(2023, 1, 2).unwrap(), 2.1),
/// ]);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.rates(), vec![2.0, 2.1, 2.05]);
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RateSeries {
    points: Vec<RatePoint>,
}

impl RateSeries {
    /// Creates a series from unordered points, sorting ascending by date.
    pub fn from_points(mut points: Vec<RatePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// The ordered observations.
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First (earliest) observation, if any.
    pub fn first(&self) -> Option<&RatePoint> {
        self.points.first()
    }

    /// Last (latest) observation, if any.
    pub fn last(&self) -> Option<&RatePoint> {
        self.points.last()
    }

    /// Rate values in date order.
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Observation dates in order.
    pub fn dates(&self) -> Vec<Date> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Whether every rate value is finite (no NaN, no infinities).
    pub fn all_finite(&self) -> bool {
        self.points.iter().all(|p| p.rate.is_finite())
    }

    /// Day gap between the last two observations, used to extend the date
    /// axis into a forecast horizon.
    ///
    /// Returns 1 for series with fewer than two points or a non-positive
    /// trailing gap (duplicate trailing dates).
    pub fn cadence_days(&self) -> u64 {
        let n = self.points.len();
        if n < 2 {
            return 1;
        }
        let gap = self.points[n - 1].date - self.points[n - 2].date;
        if gap <= 0 {
            1
        } else {
            gap as u64
        }
    }

    /// Returns a new series with every rate shifted by `offset`, preserving
    /// dates and ordering exactly.
    pub fn with_offset(&self, offset: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| RatePoint::new(p.date, p.rate + offset))
                .collect(),
        }
    }
}

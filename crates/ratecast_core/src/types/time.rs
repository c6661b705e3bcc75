//! Date type for rate observations and forecast horizons.
//!
//! Provides `Date`, a type-safe wrapper around `chrono::NaiveDate` with
//! ISO 8601 parsing, day arithmetic, and serde support. Rate series are
//! keyed by calendar date with no intraday resolution.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Provides ISO 8601 serialisation and the day arithmetic needed to extend
/// a series' date axis into a forecast horizon.
///
/// # Examples
///
/// ```
/// use ratecast_core::types::Date;
///
/// let date = Date::from_ymd(2023, 6, 15).unwrap();
/// assert_eq!(date.year(), 2023);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2023-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Day arithmetic
/// let next = date.add_days(1).unwrap();
/// assert_eq!(next - date, 1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a `Date` from year, month, and day components.
    ///
    /// Returns `Err(DateError::InvalidDate)` for out-of-range components
    /// such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Wraps an existing `chrono::NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Date(date)
    }

    /// Returns the underlying `chrono::NaiveDate`.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` calendar days after this one.
    ///
    /// Fails with `DateError::Overflow` only when the result would fall
    /// outside chrono's representable range.
    pub fn add_days(&self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or(DateError::Overflow { days })
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of calendar days from `rhs` to `self`.
    fn sub(self, rhs: Self) -> i64 {
        (self.0 - rhs.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses an ISO 8601 date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| DateError::ParseError(s.to_string()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

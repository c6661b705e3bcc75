//! # ratecast_core: Data Model for the Ratecast Backend
//!
//! Foundation layer for the interest-rate forecasting pipeline, providing:
//! - Time types: `Date` (`types::time`)
//! - Error types: `DateError` (`types::error`)
//! - Series types: `RateSeries`, `ForecastSeries` (`series`)
//!
//! ## Zero Dependency Principle
//!
//! The core layer depends on no other ratecast crate, with minimal external
//! dependencies:
//! - chrono: Date arithmetic
//! - serde: Serialisation of wire types
//! - thiserror: Structured error enums
//!
//! ## Usage Examples
//!
//! ```rust
//! use ratecast_core::series::{RatePoint, RateSeries};
//! use ratecast_core::types::Date;
//!
//! let series = RateSeries::from_points(vec![
//!     RatePoint::new(Date::from_ymd(2023, 1, 2).unwrap(), 2.1),
//!     RatePoint::new(Date::from_ymd(2023, 1, 1).unwrap(), 2.0),
//! ]);
//!
//! // Points are sorted ascending by date on construction
//! assert_eq!(series.points()[0].rate, 2.0);
//! assert_eq!(series.cadence_days(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod series;
pub mod types;

pub use series::{ForecastPoint, ForecastSeries, RatePoint, RateSeries};
pub use types::{Date, DateError};

//! # ratecast_risk: Shock Scenarios
//!
//! Scenario analysis for rate series: a closed menu of additive parallel
//! shocks applied uniformly across a series.
//!
//! ```
//! use ratecast_core::series::{RatePoint, RateSeries};
//! use ratecast_core::types::Date;
//! use ratecast_risk::ShockScenario;
//!
//! let series = RateSeries::from_points(vec![
//!     RatePoint::new(Date::from_ymd(2023, 1, 1).unwrap(), 2.0),
//! ]);
//!
//! let shocked = ShockScenario::Plus100bps.apply_to_rates(&series);
//! assert_eq!(shocked.rates(), vec![3.0]);
//! ```

mod scenarios;

pub use scenarios::{ShockScenario, SCENARIO_LABELS};

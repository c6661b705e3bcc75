//! Shock scenario enumeration and application.
//!
//! The scenario set is closed: three parallel shocks plus an explicit
//! `Identity` variant. Unknown labels resolve to `Identity` rather than
//! erroring; `from_label` distinguishes the unrecognized case so callers
//! can report it.

use ratecast_core::series::{ForecastSeries, RateSeries};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire-format labels for all scenarios, in menu order.
pub const SCENARIO_LABELS: [&str; 4] = ["+50bps", "+100bps", "-50bps", "No Shock"];

/// A named additive shock applied uniformly to every point of a series.
///
/// Labels use "bps" but the offsets are applied in whole percentage points:
/// `+50bps` adds 0.50 to a series quoted in percent. The labels are kept
/// verbatim as wire identifiers for compatibility with the upstream data
/// feed; `offset` documents the actual arithmetic.
///
/// # Examples
///
/// ```
/// use ratecast_risk::ShockScenario;
///
/// assert_eq!(ShockScenario::from_label("+50bps"), Some(ShockScenario::Plus50bps));
/// assert_eq!(ShockScenario::from_label("sideways"), None);
/// assert_eq!(ShockScenario::resolve("sideways"), ShockScenario::Identity);
/// assert_eq!(ShockScenario::Plus50bps.offset(), 0.50);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShockScenario {
    /// Parallel up-shock of 0.50.
    Plus50bps,
    /// Parallel up-shock of 1.00.
    Plus100bps,
    /// Parallel down-shock of 0.50.
    Minus50bps,
    /// No transformation; also the resolution of unknown labels.
    #[default]
    Identity,
}

impl ShockScenario {
    /// All scenarios in menu order.
    pub fn all() -> [Self; 4] {
        [
            Self::Plus50bps,
            Self::Plus100bps,
            Self::Minus50bps,
            Self::Identity,
        ]
    }

    /// Parses a known label. Returns `None` for anything outside the
    /// closed set, letting callers distinguish "explicitly no shock" from
    /// "label not recognized".
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "+50bps" => Some(Self::Plus50bps),
            "+100bps" => Some(Self::Plus100bps),
            "-50bps" => Some(Self::Minus50bps),
            "No Shock" => Some(Self::Identity),
            _ => None,
        }
    }

    /// Total resolution: unknown labels map to `Identity`.
    ///
    /// The permissive default is deliberate (the dashboard treats any
    /// unrecognized selection as "leave the series alone"); the event is
    /// logged so it stays visible in telemetry.
    pub fn resolve(label: &str) -> Self {
        match Self::from_label(label) {
            Some(scenario) => scenario,
            None => {
                tracing::debug!(label, "unrecognized shock label, applying identity");
                Self::Identity
            }
        }
    }

    /// The wire-format label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plus50bps => "+50bps",
            Self::Plus100bps => "+100bps",
            Self::Minus50bps => "-50bps",
            Self::Identity => "No Shock",
        }
    }

    /// The additive offset, in the series' own units.
    pub fn offset(&self) -> f64 {
        match self {
            Self::Plus50bps => 0.50,
            Self::Plus100bps => 1.00,
            Self::Minus50bps => -0.50,
            Self::Identity => 0.0,
        }
    }

    /// Whether this scenario leaves the series unchanged.
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Applies the shock pointwise to an observed series, returning a new
    /// series with identical dates and ordering.
    pub fn apply_to_rates(&self, series: &RateSeries) -> RateSeries {
        series.with_offset(self.offset())
    }

    /// Applies the shock pointwise to a forecast series, returning a new
    /// series with identical horizon dates.
    pub fn apply_to_forecast(&self, series: &ForecastSeries) -> ForecastSeries {
        series.with_offset(self.offset())
    }
}

impl fmt::Display for ShockScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use ratecast_core::series::RatePoint;
    use ratecast_core::types::Date;

    fn sample_series() -> RateSeries {
        let rates = [2.0, 2.1, 2.05, 2.2, 2.15, 2.3];
        let points = rates
            .iter()
            .enumerate()
            .map(|(i, &r)| {
                RatePoint::new(Date::from_ymd(2023, 1, i as u32 + 1).unwrap(), r)
            })
            .collect();
        RateSeries::from_points(points)
    }

    #[test]
    fn test_from_label_known() {
        assert_eq!(
            ShockScenario::from_label("+50bps"),
            Some(ShockScenario::Plus50bps)
        );
        assert_eq!(
            ShockScenario::from_label("+100bps"),
            Some(ShockScenario::Plus100bps)
        );
        assert_eq!(
            ShockScenario::from_label("-50bps"),
            Some(ShockScenario::Minus50bps)
        );
        assert_eq!(
            ShockScenario::from_label("No Shock"),
            Some(ShockScenario::Identity)
        );
    }

    #[test]
    fn test_from_label_unknown_is_none() {
        assert_eq!(ShockScenario::from_label("+200bps"), None);
        assert_eq!(ShockScenario::from_label(""), None);
        assert_eq!(ShockScenario::from_label("+50BPS"), None);
    }

    #[test]
    fn test_resolve_unknown_is_identity() {
        assert_eq!(ShockScenario::resolve("+200bps"), ShockScenario::Identity);
        assert_eq!(ShockScenario::resolve(""), ShockScenario::Identity);
    }

    #[test]
    fn test_label_roundtrip() {
        for scenario in ShockScenario::all() {
            assert_eq!(ShockScenario::from_label(scenario.label()), Some(scenario));
        }
    }

    #[test]
    fn test_offsets() {
        assert_relative_eq!(ShockScenario::Plus50bps.offset(), 0.50);
        assert_relative_eq!(ShockScenario::Plus100bps.offset(), 1.00);
        assert_relative_eq!(ShockScenario::Minus50bps.offset(), -0.50);
        assert_relative_eq!(ShockScenario::Identity.offset(), 0.0);
    }

    #[test]
    fn test_apply_plus_100_exact_values() {
        let shocked = ShockScenario::Plus100bps.apply_to_rates(&sample_series());
        let expected = [3.0, 3.1, 3.05, 3.2, 3.15, 3.3];
        for (point, want) in shocked.points().iter().zip(expected) {
            assert_relative_eq!(point.rate, want);
        }
    }

    #[test]
    fn test_apply_preserves_dates_and_input() {
        let series = sample_series();
        let shocked = ShockScenario::Plus50bps.apply_to_rates(&series);
        assert_eq!(shocked.dates(), series.dates());
        // Input untouched
        assert_relative_eq!(series.rates()[0], 2.0);
    }

    #[test]
    fn test_identity_returns_equal_series() {
        let series = sample_series();
        let shocked = ShockScenario::Identity.apply_to_rates(&series);
        assert_eq!(shocked, series);
    }

    #[test]
    fn test_apply_to_forecast() {
        let fc = ForecastSeries::from_horizon(
            Date::from_ymd(2023, 1, 6).unwrap(),
            1,
            vec![2.3, 2.4],
        )
        .unwrap();
        let shocked = ShockScenario::Minus50bps.apply_to_forecast(&fc);
        assert_relative_eq!(shocked.values()[0], 1.8);
        assert_relative_eq!(shocked.values()[1], 1.9);
        assert_eq!(shocked.points()[0].date, fc.points()[0].date);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(format!("{}", ShockScenario::Plus100bps), "+100bps");
        assert_eq!(format!("{}", ShockScenario::Identity), "No Shock");
    }

    proptest! {
        #[test]
        fn prop_shock_adds_offset_pointwise(
            rates in proptest::collection::vec(-5.0f64..15.0, 1..50)
        ) {
            let points = rates
                .iter()
                .enumerate()
                .map(|(i, &r)| RatePoint::new(
                    Date::from_ymd(2023, 1, 1).unwrap().add_days(i as u64).unwrap(),
                    r,
                ))
                .collect();
            let series = RateSeries::from_points(points);
            for scenario in ShockScenario::all() {
                let shocked = scenario.apply_to_rates(&series);
                prop_assert_eq!(shocked.len(), series.len());
                for (a, b) in shocked.points().iter().zip(series.points()) {
                    prop_assert!((a.rate - (b.rate + scenario.offset())).abs() < 1e-12);
                }
            }
        }

        #[test]
        fn prop_opposite_shocks_cancel(
            rates in proptest::collection::vec(-5.0f64..15.0, 1..50)
        ) {
            let points = rates
                .iter()
                .enumerate()
                .map(|(i, &r)| RatePoint::new(
                    Date::from_ymd(2023, 1, 1).unwrap().add_days(i as u64).unwrap(),
                    r,
                ))
                .collect();
            let series = RateSeries::from_points(points);
            let up = ShockScenario::Plus50bps.apply_to_rates(&series);
            let back = ShockScenario::Minus50bps.apply_to_rates(&up);
            for (a, b) in back.points().iter().zip(series.points()) {
                prop_assert!((a.rate - b.rate).abs() < 1e-12);
            }
        }
    }
}

//! Preprocessing: raw table → canonical rate series.
//!
//! The pipeline's first stage. Reads the first column as a date, the second
//! as a rate, sorts ascending by date, casts rates to `f64`. Duplicate dates
//! are kept as-is; downstream behaviour on duplicates is the caller's
//! concern.

use ratecast_core::series::{RatePoint, RateSeries};
use ratecast_core::types::Date;

use crate::error::IngestError;
use crate::reader::RawTable;

/// Accepted date formats, tried in order.
///
/// The upstream data sources use ISO dates; the slash and day-first variants
/// cover the exports seen from spreadsheet tooling.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

fn parse_date(cell: &str, row: usize) -> Result<Date, IngestError> {
    for format in DATE_FORMATS {
        if let Ok(parsed) = chrono::NaiveDate::parse_from_str(cell, format) {
            return Ok(Date::from_naive(parsed));
        }
    }
    Err(IngestError::DateParse {
        row,
        value: cell.to_string(),
    })
}

fn parse_rate(cell: &str, row: usize) -> Result<f64, IngestError> {
    cell.parse::<f64>().map_err(|_| IngestError::RateParse {
        row,
        value: cell.to_string(),
    })
}

/// Normalizes a raw two-or-more-column table into a [`RateSeries`].
///
/// Columns are positional: column 0 is the date, column 1 the rate,
/// regardless of header names. Pure with respect to its input; the returned
/// series is sorted ascending by date (stable, duplicates kept) with every
/// rate cast to `f64`.
///
/// # Errors
///
/// - [`IngestError::Schema`] when the table has fewer than two columns
///   (checked by the reader, re-checked here per row)
/// - [`IngestError::DateParse`] on the first unparseable date cell
/// - [`IngestError::RateParse`] on the first non-numeric rate cell
///
/// # Examples
///
/// ```
/// use ratecast_ingest::{clean, read_csv_str};
///
/// let table = read_csv_str("d,r\n2023-01-02,2.1\n2023-01-01,2.0\n").unwrap();
/// let series = clean(&table).unwrap();
/// assert_eq!(series.rates(), vec![2.0, 2.1]);
/// ```
pub fn clean(table: &RawTable) -> Result<RateSeries, IngestError> {
    if table.headers().len() < 2 {
        return Err(IngestError::Schema {
            columns: table.headers().len(),
        });
    }

    let mut points = Vec::with_capacity(table.row_count());
    for (i, row) in table.rows().iter().enumerate() {
        let row_number = i + 1;
        if row.len() < 2 {
            return Err(IngestError::Schema {
                columns: row.len(),
            });
        }
        let date = parse_date(&row[0], row_number)?;
        let rate = parse_rate(&row[1], row_number)?;
        points.push(RatePoint::new(date, rate));
    }

    Ok(RateSeries::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_csv_str;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn table(csv: &str) -> RawTable {
        read_csv_str(csv).unwrap()
    }

    #[test]
    fn test_clean_sorts_ascending() {
        let series = clean(&table(
            "date,rate\n2023-01-03,2.05\n2023-01-01,2.0\n2023-01-02,2.1\n",
        ))
        .unwrap();
        assert_eq!(series.rates(), vec![2.0, 2.1, 2.05]);
        let dates = series.dates();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_clean_casts_rates_to_float() {
        let series = clean(&table("date,rate\n2023-01-01,2\n2023-01-02,2.5\n")).unwrap();
        assert_relative_eq!(series.rates()[0], 2.0);
        assert_relative_eq!(series.rates()[1], 2.5);
        assert!(series.all_finite());
    }

    #[test]
    fn test_clean_accepts_slash_dates() {
        let series = clean(&table("date,rate\n2023/01/01,2.0\n")).unwrap();
        assert_eq!(series.dates()[0], Date::from_ymd(2023, 1, 1).unwrap());
    }

    #[test]
    fn test_clean_accepts_us_dates() {
        let series = clean(&table("date,rate\n01/15/2023,2.0\n")).unwrap();
        assert_eq!(series.dates()[0], Date::from_ymd(2023, 1, 15).unwrap());
    }

    #[test]
    fn test_clean_rejects_bad_date() {
        let err = clean(&table("date,rate\nnot-a-date,x\n")).unwrap_err();
        // Date is checked before the rate, so the parse error names the date
        match err {
            IngestError::DateParse { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected DateParse, got {other}"),
        }
    }

    #[test]
    fn test_clean_rejects_bad_rate() {
        let err = clean(&table("date,rate\n2023-01-01,abc\n")).unwrap_err();
        assert!(matches!(err, IngestError::RateParse { row: 1, .. }));
    }

    #[test]
    fn test_clean_reports_failing_row() {
        let err = clean(&table("date,rate\n2023-01-01,2.0\n2023-01-02,oops\n")).unwrap_err();
        assert!(matches!(err, IngestError::RateParse { row: 2, .. }));
    }

    #[test]
    fn test_clean_passes_non_finite_literals_through() {
        // `f64::from_str` accepts "NaN" and "inf", and clean casts without a
        // finiteness check (numeric literals are not rejected here). The
        // forecaster rejects such a series with its non-finite input error.
        let series = clean(&table("date,rate\n2023-01-01,NaN\n2023-01-02,inf\n")).unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.all_finite());
    }

    #[test]
    fn test_clean_keeps_duplicate_dates() {
        let series = clean(&table("date,rate\n2023-01-01,2.0\n2023-01-01,2.5\n")).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_clean_empty_table() {
        let series = clean(&table("date,rate\n")).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_clean_is_idempotent() {
        // Re-expressing the cleaned series as CSV and cleaning again yields
        // an equivalent series.
        let first = clean(&table(
            "date,rate\n2023-01-02,2.1\n2023-01-01,2.0\n2023-01-03,2.05\n",
        ))
        .unwrap();

        let mut csv = String::from("date,rate\n");
        for p in first.points() {
            csv.push_str(&format!("{},{}\n", p.date, p.rate));
        }
        let second = clean(&table(&csv)).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_clean_output_is_sorted_and_finite(
            rates in proptest::collection::vec(-10.0f64..10.0, 0..40),
            day_offsets in proptest::collection::vec(0u32..300, 0..40),
        ) {
            let mut csv = String::from("date,rate\n");
            for (rate, offset) in rates.iter().zip(day_offsets.iter()) {
                let date = chrono::NaiveDate::from_ymd_opt(2023, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(*offset as u64))
                    .unwrap();
                csv.push_str(&format!("{},{}\n", date.format("%Y-%m-%d"), rate));
            }
            let series = clean(&read_csv_str(&csv).unwrap()).unwrap();
            let dates = series.dates();
            prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(series.all_finite());
        }
    }
}

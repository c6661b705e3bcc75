//! Ingestion error types.

use thiserror::Error;

/// Errors from CSV reading and preprocessing.
///
/// # Variants
/// - `Schema`: the table shape is wrong (too few columns, not valid
///   comma-delimited UTF-8 CSV)
/// - `DateParse`: a date cell could not be parsed
/// - `RateParse`: a rate cell is not numeric
/// - `Io`: the input could not be read at all
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input table has fewer columns than the required (date, rate) pair,
    /// or is not parseable as comma-delimited UTF-8 CSV.
    #[error("Malformed input table: expected at least 2 columns, got {columns}")]
    Schema {
        /// Number of columns found.
        columns: usize,
    },

    /// CSV-level failure (encoding, quoting, ragged rows).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date cell could not be parsed.
    #[error("Unparseable date at row {row}: {value:?}")]
    DateParse {
        /// 1-based data row (header excluded).
        row: usize,
        /// The offending cell content.
        value: String,
    },

    /// A rate cell is not numeric.
    #[error("Non-numeric rate at row {row}: {value:?}")]
    RateParse {
        /// 1-based data row (header excluded).
        row: usize,
        /// The offending cell content.
        value: String,
    },

    /// The input could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Whether this is a table-shape error rather than a cell-level one.
    pub fn is_schema(&self) -> bool {
        matches!(self, IngestError::Schema { .. } | IngestError::Csv(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_display() {
        let err = IngestError::Schema { columns: 1 };
        assert_eq!(
            format!("{}", err),
            "Malformed input table: expected at least 2 columns, got 1"
        );
        assert!(err.is_schema());
    }

    #[test]
    fn test_date_parse_display() {
        let err = IngestError::DateParse {
            row: 3,
            value: "not-a-date".to_string(),
        };
        assert_eq!(format!("{}", err), "Unparseable date at row 3: \"not-a-date\"");
        assert!(!err.is_schema());
    }

    #[test]
    fn test_rate_parse_display() {
        let err = IngestError::RateParse {
            row: 1,
            value: "x".to_string(),
        };
        assert_eq!(format!("{}", err), "Non-numeric rate at row 1: \"x\"");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = IngestError::Schema { columns: 0 };
        let _: &dyn std::error::Error = &err;
    }
}

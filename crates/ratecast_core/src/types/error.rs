//! Error types for date construction and parsing.

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse a date string
/// - `Overflow`: Day arithmetic left the representable date range
///
/// # Examples
/// ```
/// use ratecast_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Day arithmetic left the representable date range.
    #[error("Date overflow adding {days} days")]
    Overflow {
        /// Day count that overflowed
        days: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
    }

    #[test]
    fn test_parse_error_display() {
        let err = DateError::ParseError("not-a-date".to_string());
        assert_eq!(format!("{}", err), "Date parse error: not-a-date");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = DateError::ParseError("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_overflow_display() {
        let err = DateError::Overflow { days: 30 };
        assert_eq!(format!("{}", err), "Date overflow adding 30 days");
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}

//! CSV reading into an untyped table.
//!
//! Enforces the input contract up front: UTF-8, comma-delimited, header row
//! present, at least two columns. Anything else fails with a schema-level
//! error rather than being coerced.

use std::io::Read;
use std::path::Path;

use crate::error::IngestError;

/// An untyped tabular structure: a header row plus string-valued data rows.
///
/// Column meaning is positional; header names are retained only for
/// diagnostics and are not interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table, failing fast when the header carries fewer than two
    /// columns.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, IngestError> {
        if headers.len() < 2 {
            return Err(IngestError::Schema {
                columns: headers.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    /// Header names as read from the first row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows (header excluded).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn read_table<R: Read>(reader: R) -> Result<RawTable, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.len() < 2 {
        return Err(IngestError::Schema {
            columns: headers.len(),
        });
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "CSV table read");
    RawTable::new(headers, rows)
}

/// Reads a CSV document from an in-memory string.
pub fn read_csv_str(content: &str) -> Result<RawTable, IngestError> {
    read_table(content.as_bytes())
}

/// Reads a CSV file from disk.
pub fn read_csv_path(path: impl AsRef<Path>) -> Result<RawTable, IngestError> {
    let file = std::fs::File::open(path)?;
    read_table(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_two_columns() {
        let table = read_csv_str("date,rate\n2023-01-01,2.0\n2023-01-02,2.1\n").unwrap();
        assert_eq!(table.headers(), &["date", "rate"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], vec!["2023-01-01", "2.0"]);
    }

    #[test]
    fn test_header_names_are_irrelevant() {
        let table = read_csv_str("Observation Date,Yield (%)\n2023-01-01,2.0\n").unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_single_column_is_schema_error() {
        let err = read_csv_str("date\n2023-01-01\n").unwrap_err();
        assert!(matches!(err, IngestError::Schema { columns: 1 }));
    }

    #[test]
    fn test_extra_columns_are_tolerated() {
        // Only the first two columns are interpreted downstream
        let table = read_csv_str("date,rate,source\n2023-01-01,2.0,bloomberg\n").unwrap();
        assert_eq!(table.headers().len(), 3);
        assert_eq!(table.rows()[0].len(), 3);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = read_csv_str("date,rate\n2023-01-01\n").unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let table = read_csv_str("date,rate\n 2023-01-01 , 2.0 \n").unwrap();
        assert_eq!(table.rows()[0], vec!["2023-01-01", "2.0"]);
    }

    #[test]
    fn test_empty_body_is_allowed() {
        let table = read_csv_str("date,rate\n").unwrap();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "date,rate\n2023-01-01,2.0\n").unwrap();
        let table = read_csv_path(file.path()).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_csv_path("/nonexistent/rates.csv").unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}

//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod clean;
pub mod forecast;
pub mod shock;

use crate::{CliError, Result};

/// Supported output formats for tabular commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawing table on stdout
    Table,
    /// Pretty-printed JSON
    Json,
    /// Two-column CSV
    Csv,
}

impl OutputFormat {
    /// Parse a `--format` flag value.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            ))),
        }
    }
}

/// Render rows of (date, value) pairs as a box-drawing table.
pub(crate) fn render_table(value_header: &str, rows: &[(String, f64)]) -> String {
    let mut out = String::new();
    out.push_str("┌────────────┬────────────┐\n");
    out.push_str(&format!("│ {:<10} │ {:<10} │\n", "Date", value_header));
    out.push_str("├────────────┼────────────┤\n");
    if rows.is_empty() {
        out.push_str(&format!("│ {:<10} │ {:<10} │\n", "(no data)", ""));
    }
    for (date, value) in rows {
        out.push_str(&format!("│ {:<10} │ {:<10.4} │\n", date, value));
    }
    out.push_str("└────────────┴────────────┘");
    out
}

/// Render rows of (date, value) pairs as CSV.
pub(crate) fn render_csv(value_header: &str, rows: &[(String, f64)]) -> String {
    let mut out = format!("date,{}\n", value_header);
    for (date, value) in rows {
        out.push_str(&format!("{},{}\n", date, value));
    }
    out
}

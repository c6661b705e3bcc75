//! # ratecast_ingest: CSV Ingestion and Preprocessing
//!
//! Adapter layer turning uploaded tabular input into the canonical
//! [`RateSeries`](ratecast_core::series::RateSeries):
//!
//! - `reader`: CSV bytes/files → [`RawTable`] (UTF-8, comma-delimited,
//!   header row required, at least two columns)
//! - `clean`: [`RawTable`] → `RateSeries` (positional date/rate columns,
//!   date parse, stable sort, float cast)
//!
//! The two columns are read positionally: the first is the date, the second
//! the rate, regardless of header names.
//!
//! ```
//! use ratecast_ingest::{clean, read_csv_str};
//!
//! let table = read_csv_str("date,rate\n2023-01-02,2.1\n2023-01-01,2.0\n").unwrap();
//! let series = clean(&table).unwrap();
//! assert_eq!(series.rates(), vec![2.0, 2.1]);
//! ```

mod error;
mod preprocess;
mod reader;

pub use error::IngestError;
pub use preprocess::clean;
pub use reader::{read_csv_path, read_csv_str, RawTable};

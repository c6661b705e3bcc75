//! Foundational types: dates and their errors.

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::Date;

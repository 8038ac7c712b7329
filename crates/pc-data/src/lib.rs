//! Data handling for the parallel coordinates plot engine

pub mod config;
pub mod sources;
pub mod table;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use config::NullConfig;
pub use sources::{load_csv, read_csv};
pub use table::NumericTable;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Column '{name}' has {len} rows, expected {expected}")]
    RaggedColumn {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("No numeric columns found")]
    NoNumericColumns,
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

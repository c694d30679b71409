use std::fmt;

use thiserror::Error;

use crate::column::ColumnType;

/// Errors raised by table, statistics, and inventory operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] bincode::error::EncodeError),

    #[error("failed to decode inventory: {0}")]
    Decode(#[source] bincode::error::DecodeError),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("column type mismatch: column {name}, expected {expected:?}, found {found:?}")]
    ColumnTypeMismatch {
        name: String,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// A statistic was requested over zero non-missing values
    #[error("column has no non-missing values: {0}")]
    EmptyColumn(String),

    #[error("invalid percentile range: low {low}, high {high} (expected 0 <= low <= high <= 100)")]
    InvalidPercentile { low: f64, high: f64 },

    #[error("column {name} mixes types: value {value:?} at row {row} is not {expected:?}")]
    MixedColumnType {
        name: String,
        row: usize,
        value: String,
        expected: ColumnType,
    },

    #[error("key already exists: {0}")]
    DuplicateKey(String),

    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for Error {
    fn from(err: bincode::error::EncodeError) -> Self {
        Error::Encode(err)
    }
}

impl From<bincode::error::DecodeError> for Error {
    fn from(err: bincode::error::DecodeError) -> Self {
        Error::Decode(err)
    }
}

/// Recoverable conditions. The operation that raised one still returns a
/// valid result (usually the unmodified table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An optional column was absent, so the operation was a no-op
    ColumnNotFound(String),
    /// A multi-file load matched no input files
    NoInputFiles { dir: String, prefix: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ColumnNotFound(name) => write!(f, "column '{}' not found", name),
            Warning::NoInputFiles { dir, prefix } => {
                write!(f, "no CSV files starting with '{}' in {}", prefix, dir)
            }
        }
    }
}

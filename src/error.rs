//! Error types for the csv-profiler library.

use thiserror::Error;

/// Main error type for the library.
///
/// The profiling engine itself never fails; these errors come from loading
/// tables, reading configuration and writing reports.
#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row} has {actual} cells, expected at most {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, ProfilerError>;

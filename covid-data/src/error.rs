/// Error types for the COVID data library
use thiserror::Error;

/// Main error type for dataset loading and selection
#[derive(Error, Debug)]
pub enum CovidDataError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Bad response status for {dataset}: {status}")]
    BadStatus { dataset: String, status: u16 },

    /// Upstream answered with an empty body
    #[error("Empty response for {0}")]
    EmptyResponse(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A selection or schema check named a column the data does not have
    #[error("Unknown data column: {column}")]
    InvalidColumn { column: String },

    /// A required summary key is absent
    #[error("Missing summary key: {key}")]
    MissingKey { key: String },

    /// A required syndromic series is absent
    #[error("Missing series: {series}")]
    MissingSeries { series: String },

    /// A grouping key appeared more than once
    #[error("Duplicate group {group:?} in {dataset}")]
    DuplicateGroup { dataset: String, group: String },

    /// A fixed-size table came back with the wrong number of rows
    #[error("Expected {expected} rows in {dataset}, found {found}")]
    RowCount {
        dataset: String,
        expected: usize,
        found: usize,
    },
}

/// Type alias for Results using CovidDataError
pub type Result<T> = std::result::Result<T, CovidDataError>;

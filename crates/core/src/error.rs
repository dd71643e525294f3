//! Error types for the longball analysis pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the longball analysis pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date string matched neither accepted format.
    #[error("Malformed date: {0}")]
    MalformedDate(String),

    /// A required field is absent from an input row.
    #[error("Schema error: {0}")]
    Schema(String),

    /// No records exist for the target season, so the cohort split is undefined.
    #[error("Undefined breakpoint: {0}")]
    UndefinedBreakpoint(String),

    /// A sample is too small to define the requested operation.
    #[error("Insufficient sample: {0}")]
    InsufficientSample(String),

    /// Data error (invalid or inconsistent data).
    #[error("Data error: {0}")]
    Data(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a malformed date error.
    pub fn malformed_date(msg: impl Into<String>) -> Self {
        Error::MalformedDate(msg.into())
    }

    /// Create a schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Error::Schema(msg.into())
    }

    /// Create an undefined breakpoint error.
    pub fn undefined_breakpoint(msg: impl Into<String>) -> Self {
        Error::UndefinedBreakpoint(msg.into())
    }

    /// Create an insufficient sample error.
    pub fn insufficient_sample(msg: impl Into<String>) -> Self {
        Error::InsufficientSample(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }
}

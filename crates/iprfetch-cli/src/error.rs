//! Error types for the iprfetch CLI
//!
//! One fatal/recoverable split matters here: failing to open the input CSV or
//! parse the arguments aborts the run, while any failure scoped to a single
//! identifier (HTTP status, transport, malformed JSON) is logged by the
//! pipeline and that identifier is skipped.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The API answered with a non-success HTTP status
    #[error("HTTP status {status} for '{query}'")]
    ApiStatus { query: String, status: reqwest::StatusCode },

    /// HTTP request failed at the transport level
    #[error("Network request failed: {0}. Check your internet connection and the API base URL.")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expect
    #[error("Failed to parse JSON response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Reading or writing a CSV file failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check the path and permissions.")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an API status error
    pub fn api_status(query: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::ApiStatus {
            query: query.into(),
            status,
        }
    }

    /// Whether this error came from an HTTP-level status rather than an
    /// unexpected failure (transport, parse, io)
    pub fn is_api_status(&self) -> bool {
        matches!(self, Self::ApiStatus { .. })
    }
}

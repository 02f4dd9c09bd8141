//! Error types for the swordfish library.

use thiserror::Error;

/// Result type alias for swordfish operations.
pub type Result<T> = std::result::Result<T, SwordfishError>;

/// Errors that can occur during search and scrape operations.
#[derive(Error, Debug)]
pub enum SwordfishError {
    /// HTTP request through the Tor proxy failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Per-item deadline exceeded.
    #[error("timeout")]
    Timeout,

    /// Response body was not in the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration (bad worker count, missing input file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// No search engines configured.
    #[error("No search engines configured")]
    NoEngines,

    /// Invalid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

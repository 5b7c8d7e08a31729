//! Error types for cislack-core

use thiserror::Error;

/// Result type alias for cislack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cislack operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing configuration input
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed `custom_payload` input
    #[error("Custom payload error: {0}")]
    CustomPayload(String),

    /// GitHub event payload could not be read or parsed
    #[error("Event parse error: {0}")]
    EventParse(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Runtime error (Tokio runtime construction)
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// HTTP transport or status error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Slack answered with `ok: false`
    #[error("Slack API error: {0}")]
    SlackApi(String),

    /// Slack rate limit hit (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.without_url().to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Configuration error
    Config,
    /// Custom payload error
    CustomPayload,
    /// GitHub event parsing error
    EventParse,
    /// I/O operation error
    Io,
    /// Runtime error
    Runtime,
    /// HTTP error
    Http,
    /// Slack API error
    SlackApi,
    /// Rate limit exceeded
    RateLimitExceeded,
}

impl Error {
    /// Get the error kind. Zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::CustomPayload(_) => ErrorKind::CustomPayload,
            Error::EventParse(_) => ErrorKind::EventParse,
            Error::Io(_) => ErrorKind::Io,
            Error::Runtime(_) => ErrorKind::Runtime,
            Error::Http(_) => ErrorKind::Http,
            Error::SlackApi(_) => ErrorKind::SlackApi,
            Error::RateLimitExceeded(_) => ErrorKind::RateLimitExceeded,
        }
    }

    /// Borrow the error message. Zero allocation.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Config(msg)
            | Error::CustomPayload(msg)
            | Error::EventParse(msg)
            | Error::Runtime(msg)
            | Error::Http(msg)
            | Error::SlackApi(msg)
            | Error::RateLimitExceeded(msg) => msg,
            Error::Io(_) => "I/O error",
        }
    }
}

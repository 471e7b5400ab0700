//! Common error types for Lapify

use thiserror::Error;

/// Common result type for Lapify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Lapify crates
#[derive(Error, Debug)]
pub enum Error {
    /// Source could not be reached (DNS, connect, TLS, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Source answered with a non-success status
    #[error("Source returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Payload parsed but no row survived admission
    #[error("No data found in the sheet")]
    EmptyResult,

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for the failures that send ingestion to the fallback dataset
    pub fn is_ingestion_failure(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::HttpStatus { .. } | Error::EmptyResult
        )
    }
}

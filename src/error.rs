//! Error types for nxt-client.

use thiserror::Error;

/// Main error type for all NXT operations.
#[derive(Debug, Error)]
pub enum NxtError {
    /// A caller-supplied value violates a static constraint
    /// (filename/name too long, motor port out of range).
    ///
    /// Raised before any I/O — the command is never partially written.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error on the underlying stream (closed connection, read/write
    /// fault, EOF before a declared frame length was satisfied).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Protocol error (reply tag is not `0x02`, reply too short for its
    /// fixed-offset fields).
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Result type alias using NxtError.
pub type Result<T> = std::result::Result<T, NxtError>;

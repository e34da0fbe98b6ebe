//! Error types for memofile
//!
//! Provides a unified error type for every stage of a request. The variants
//! exist for diagnostics and tests; callers of the binary only ever see
//! `Invalid Command`.

use thiserror::Error;

/// Result type alias using MemoError
pub type Result<T> = std::result::Result<T, MemoError>;

/// Unified error type for memofile operations
#[derive(Debug, Error)]
pub enum MemoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Input too large: {size} bytes (max {max})")]
    InputTooLarge { size: usize, max: usize },
}

/// Coarse classification of a [`MemoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport-level read/write failure
    Io,

    /// Protocol shape violation or rejected target file
    InvalidCommand,
}

impl MemoError {
    /// Shorthand for building an `InvalidCommand` error
    pub fn invalid(reason: impl Into<String>) -> Self {
        MemoError::InvalidCommand(reason.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemoError::Io(_) => ErrorKind::Io,
            MemoError::InvalidCommand(_) | MemoError::InputTooLarge { .. } => {
                ErrorKind::InvalidCommand
            }
        }
    }
}

//! Error types for Evoplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Evoplot operations.
pub type Result<T> = std::result::Result<T, EvoplotError>;

/// Errors that can occur in Evoplot.
#[derive(Debug, Error)]
pub enum EvoplotError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying file-system error.
        #[source]
        source: std::io::Error,
    },

    /// A token in the fitness log is not a number.
    #[error("Invalid numeric token '{token}' at {path}:{line}")]
    Parse {
        /// Path of the fitness log.
        path: PathBuf,
        /// 1-based line number of the offending token.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A row in the fitness log has the wrong number of columns.
    #[error("Inconsistent row at {path}:{line}: expected {expected} columns, found {found}")]
    ColumnMismatch {
        /// Path of the fitness log.
        path: PathBuf,
        /// 1-based line number of the offending row.
        line: usize,
        /// Column count established by the first data row.
        expected: usize,
        /// Column count actually found.
        found: usize,
    },

    /// Malformed fitness log.
    #[error("Malformed fitness log: {0}")]
    Malformed(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl EvoplotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(path: PathBuf, line: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            path,
            line,
            token: token.into(),
        }
    }
}

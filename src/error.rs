//! Error types for table reading and writing

use thiserror::Error;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur while reading or writing a table
#[derive(Debug, Error)]
pub enum TableError {
    /// Source file could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Compressed source could not be opened or decoded
    #[error("Read error: {0}")]
    ReadError(String),

    /// A data line has fewer tokens than the requested columns need
    #[error("Line {line} of source file contains {found} columns, but was expecting {expected}.")]
    ColumnCount {
        /// Physical line number (0-based)
        line: usize,
        /// Tokens found on the line
        found: usize,
        /// Tokens required by the highest requested column
        expected: usize,
    },

    /// A requested column index has no representable token count
    #[error("Column index {column} is out of range")]
    ColumnOutOfRange {
        /// Offending column index
        column: usize,
    },

    /// A requested token is not a valid floating-point literal
    #[error("On line {line} of source file: invalid float literal {token:?}")]
    InvalidNumber {
        /// Physical line number (0-based)
        line: usize,
        /// Offending token text
        token: String,
    },

    /// Output could not be created or written
    #[error("Write error: {0}")]
    WriteError(String),

    /// Writer was used inconsistently
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl TableError {
    /// Physical line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            TableError::ColumnCount { line, .. } | TableError::InvalidNumber { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

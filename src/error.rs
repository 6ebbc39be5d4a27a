//! Error types for ygo_pack_value

use thiserror::Error;

/// Unified error type for parsing, exporting and reporting
#[derive(Debug, Error)]
pub enum PackError {
    /// Listing dump does not follow the 6-line record layout, or a field is unusable
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PackError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        PackError::MalformedInput {
            line,
            message: message.into(),
        }
    }
}

/// Result alias for ygo_pack_value operations
pub type Result<T> = std::result::Result<T, PackError>;

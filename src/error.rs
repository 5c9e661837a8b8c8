//! Custom error types for pocket-ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed text: bad date syntax, bad number, wrong column count
    #[error("Format error: {0}")]
    Format(String),

    /// Numerically valid date component outside its allowed range
    #[error("Range error: {0}")]
    Range(String),

    /// A ledger file line whose fields failed to parse
    #[error("Invalid record in line '{line}': {source}")]
    Record {
        line: String,
        #[source]
        source: Box<LedgerError>,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl LedgerError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.to_string(),
        }
    }

    /// Wrap a field-level failure with the ledger line it came from
    pub fn record(line: impl Into<String>, source: LedgerError) -> Self {
        Self::Record {
            line: line.into(),
            source: Box::new(source),
        }
    }

    /// Check if this is a format-class error (including bad ledger records)
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_) | Self::Record { .. })
    }

    /// Check if this is a date range error
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions. None of these conditions is fatal to
//! the process; the caller decides whether to re-prompt, report or exit.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user supplied values (dates, amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The store already holds as many records as it is allowed to
    #[error("Ledger is full: capacity of {capacity} expenses reached")]
    CapacityExceeded { capacity: usize },

    /// Persistence errors (encoding, atomic write, rename)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The caller declined a destructive operation
    #[error("Operation cancelled")]
    Cancelled,
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether an interactive session should carry on after this error
    ///
    /// Broken configuration or a failing terminal ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Io(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

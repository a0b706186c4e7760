//! Error types for the record store
//!
//! This module defines every error a record operation can report. All of them
//! are recoverable at the operation boundary: the caller renders the message
//! and accepts the next command.
//!
//! # Error Categories
//!
//! - **File Errors**: backing file cannot be opened, read or written
//! - **Validation Errors**: a field does not meet its format rules
//! - **Lookup Errors**: the target record is absent or the store is empty
//! - **Balance Errors**: bad amount operand, minimum balance breached, overflow

use crate::types::customer::{AccountNumber, Balance};
use thiserror::Error;

/// Main error type for record operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Backing file could not be opened for reading or writing
    ///
    /// On load the caller may treat the store as empty; on save nothing
    /// has been written.
    #[error("File unavailable: {path}: {message}")]
    FileUnavailable {
        /// Path of the backing file
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// I/O error while streaming records to or from an open file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A field failed its format rule; nothing was persisted
    #[error("Invalid {field} - {reason}")]
    ValidationFailed {
        /// Name of the offending field
        field: String,
        /// Human readable rule that was violated
        reason: String,
    },

    /// No record matched the lookup key
    #[error("{kind} {key} not found")]
    RecordNotFound {
        /// Record kind ("Employee" / "Customer")
        kind: String,
        /// The key that was searched for
        key: String,
    },

    /// The backing file holds no records
    #[error("{kind} data file was empty")]
    StoreEmpty {
        /// Record kind ("Employee" / "Customer")
        kind: String,
    },

    /// Deposit or withdrawal amount is not an acceptable number
    #[error("Invalid amount '{operand}': {reason}")]
    InvalidOperand {
        /// The raw operand as supplied by the caller
        operand: String,
        /// Why the operand was rejected
        reason: String,
    },

    /// Withdrawal would take the balance below the minimum floor
    ///
    /// `requested` is `None` when the balance is already at or below the
    /// floor and no amount was considered.
    #[error(
        "Insufficient funds for account {account}: balance {balance}{}",
        requested.map(|r| format!(", requested {}", r)).unwrap_or_default()
    )]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Balance,
        /// Requested withdrawal amount (if one was evaluated)
        requested: Option<Balance>,
    },

    /// Checked arithmetic on an identifier or balance overflowed
    #[error("Arithmetic overflow in {operation} for key {key}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Identifier or account involved
        key: u32,
    },
}

impl From<std::io::Error> for RecordError {
    fn from(error: std::io::Error) -> Self {
        RecordError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for RecordError {
    fn from(error: csv::Error) -> Self {
        RecordError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl RecordError {
    /// Create a FileUnavailable error for `path`
    pub fn file_unavailable(path: &std::path::Path, error: &std::io::Error) -> Self {
        RecordError::FileUnavailable {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a ValidationFailed error
    pub fn validation_failed(field: &str, reason: &str) -> Self {
        RecordError::ValidationFailed {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a RecordNotFound error
    pub fn not_found(kind: &str, key: impl ToString) -> Self {
        RecordError::RecordNotFound {
            kind: kind.to_string(),
            key: key.to_string(),
        }
    }

    /// Create a StoreEmpty error
    pub fn store_empty(kind: &str) -> Self {
        RecordError::StoreEmpty {
            kind: kind.to_string(),
        }
    }

    /// Create an InvalidOperand error
    pub fn invalid_operand(operand: &str, reason: &str) -> Self {
        RecordError::InvalidOperand {
            operand: operand.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: AccountNumber,
        balance: Balance,
        requested: Option<Balance>,
    ) -> Self {
        RecordError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, key: u32) -> Self {
        RecordError::ArithmeticOverflow {
            operation: operation.to_string(),
            key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_unavailable(
        RecordError::FileUnavailable { path: "customers.txt".to_string(), message: "Permission denied".to_string() },
        "File unavailable: customers.txt: Permission denied"
    )]
    #[case::io_error(
        RecordError::Io { message: "disk full".to_string() },
        "I/O error: disk full"
    )]
    #[case::validation_failed(
        RecordError::ValidationFailed { field: "phone".to_string(), reason: "must be exactly 10 digits".to_string() },
        "Invalid phone - must be exactly 10 digits"
    )]
    #[case::not_found(
        RecordError::RecordNotFound { kind: "Customer".to_string(), key: "42".to_string() },
        "Customer 42 not found"
    )]
    #[case::store_empty(
        RecordError::StoreEmpty { kind: "Employee".to_string() },
        "Employee data file was empty"
    )]
    #[case::invalid_operand(
        RecordError::InvalidOperand { operand: "12a".to_string(), reason: "must contain only digits".to_string() },
        "Invalid amount '12a': must contain only digits"
    )]
    #[case::insufficient_funds_with_request(
        RecordError::InsufficientFunds { account: 3, balance: 1500, requested: Some(600) },
        "Insufficient funds for account 3: balance 1500, requested 600"
    )]
    #[case::insufficient_funds_at_floor(
        RecordError::InsufficientFunds { account: 3, balance: 1000, requested: None },
        "Insufficient funds for account 3: balance 1000"
    )]
    #[case::arithmetic_overflow(
        RecordError::ArithmeticOverflow { operation: "deposit".to_string(), key: 7 },
        "Arithmetic overflow in deposit for key 7"
    )]
    fn test_error_display(#[case] error: RecordError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::validation_failed(
        RecordError::validation_failed("name", "must contain only letters and spaces"),
        RecordError::ValidationFailed { field: "name".to_string(), reason: "must contain only letters and spaces".to_string() }
    )]
    #[case::not_found(
        RecordError::not_found("Employee", 9),
        RecordError::RecordNotFound { kind: "Employee".to_string(), key: "9".to_string() }
    )]
    #[case::store_empty(
        RecordError::store_empty("Customer"),
        RecordError::StoreEmpty { kind: "Customer".to_string() }
    )]
    #[case::insufficient_funds(
        RecordError::insufficient_funds(1, 1200, Some(500)),
        RecordError::InsufficientFunds { account: 1, balance: 1200, requested: Some(500) }
    )]
    fn test_helper_functions(#[case] result: RecordError, #[case] expected: RecordError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: RecordError = io_error.into();
        assert!(matches!(error, RecordError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_file_unavailable_keeps_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let error = RecordError::file_unavailable(std::path::Path::new("/x/y.txt"), &io_error);
        assert_eq!(
            error,
            RecordError::FileUnavailable {
                path: "/x/y.txt".to_string(),
                message: "No such file".to_string(),
            }
        );
    }
}

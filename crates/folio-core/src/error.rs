//! Error types for the Folio library.
//!
//! This module defines the validation errors raised when constructing or
//! mutating domain types.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

/// Validation errors for the core domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// Malformed or calendrically invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid price amount.
    #[error("Invalid amount: {value} - {reason}")]
    InvalidAmount {
        /// The invalid amount value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },
}

impl FolioError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = FolioError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));

        let err = FolioError::invalid_amount(dec!(-5), "amount must be non-negative");
        assert!(err.to_string().contains("-5"));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_error_clone() {
        let err = FolioError::invalid_date("bad input");
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}

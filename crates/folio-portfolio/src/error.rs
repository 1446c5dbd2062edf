//! Error types for portfolio operations.

use folio_core::FolioError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// A price observation failed validation while building or mutating
    /// a stock.
    #[error("Invalid price for stock '{stock}': {source}")]
    InvalidPrice {
        /// The stock the observation was destined for.
        stock: String,
        /// The underlying validation failure.
        #[source]
        source: FolioError,
    },

    /// A validation failure outside any stock context.
    #[error(transparent)]
    Validation(#[from] FolioError),
}

impl PortfolioError {
    /// Creates an invalid price error tagged with the stock name.
    #[must_use]
    pub fn invalid_price(stock: impl Into<String>, source: FolioError) -> Self {
        Self::InvalidPrice {
            stock: stock.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let source = FolioError::invalid_amount(dec!(-5), "amount must be non-negative");
        let err = PortfolioError::invalid_price("AAPL", source);
        assert!(err.to_string().contains("AAPL"));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_from_core_error() {
        let err: PortfolioError = FolioError::invalid_date("nope").into();
        assert!(err.to_string().contains("Invalid date"));
    }
}

//! Price type for stock price series.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{FolioError, FolioResult};

/// A single validated (date, amount) price observation.
///
/// Both fields are validated at construction and on every mutation, so a
/// `Price` can never hold a malformed date or a negative amount.
///
/// # Example
///
/// ```rust
/// use folio_core::types::Price;
/// use rust_decimal_macros::dec;
///
/// let price = Price::new("2024-01-01", dec!(150)).unwrap();
/// assert_eq!(price.amount(), dec!(150));
///
/// assert!(Price::new("2024-02-30", dec!(150)).is_err());
/// assert!(Price::new("2024-01-01", dec!(-5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriceParts")]
pub struct Price {
    /// Observation date.
    date: Date,
    /// Observed amount, always non-negative.
    amount: Decimal,
}

/// Mirror of [`Price`] that routes deserialization through validation,
/// so deserialized observations honor the same invariants as
/// constructed ones.
#[derive(Deserialize)]
struct PriceParts {
    date: Date,
    amount: Decimal,
}

impl TryFrom<PriceParts> for Price {
    type Error = FolioError;

    fn try_from(parts: PriceParts) -> FolioResult<Self> {
        Self::from_parts(parts.date, parts.amount)
    }
}

impl Price {
    /// Creates a new price observation from a "yyyy-mm-dd" date string
    /// and an amount.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidDate` for a malformed or impossible
    /// date, or `FolioError::InvalidAmount` for a negative amount. No
    /// observation is constructed on failure.
    pub fn new(date: &str, amount: Decimal) -> FolioResult<Self> {
        let date = Date::parse(date)?;
        Self::from_parts(date, amount)
    }

    /// Creates a price observation from an already-parsed date.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidAmount` if the amount is negative.
    pub fn from_parts(date: Date, amount: Decimal) -> FolioResult<Self> {
        validate_amount(amount)?;
        Ok(Self { date, amount })
    }

    /// Returns the observation date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the observed amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Replaces the observation date, re-validating with the same rules
    /// as construction.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidDate` on invalid input; the existing
    /// date is left untouched.
    pub fn set_date(&mut self, date: &str) -> FolioResult<()> {
        self.date = Date::parse(date)?;
        Ok(())
    }

    /// Replaces the observed amount, re-validating with the same rules
    /// as construction.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidAmount` on negative input; the
    /// existing amount is left untouched.
    pub fn set_amount(&mut self, amount: Decimal) -> FolioResult<()> {
        validate_amount(amount)?;
        self.amount = amount;
        Ok(())
    }
}

fn validate_amount(amount: Decimal) -> FolioResult<()> {
    if amount < Decimal::ZERO {
        return Err(FolioError::invalid_amount(
            amount,
            "amount must be non-negative",
        ));
    }
    Ok(())
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.date, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_creation() {
        let price = Price::new("2024-01-01", dec!(150)).unwrap();
        assert_eq!(price.date(), Date::parse("2024-01-01").unwrap());
        assert_eq!(price.amount(), dec!(150));
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let price = Price::new("2024-01-01", Decimal::ZERO).unwrap();
        assert_eq!(price.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = Price::new("2024-02-30", dec!(150)).unwrap_err();
        assert!(matches!(err, FolioError::InvalidDate { .. }));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Price::new("2024-01-01", dec!(-5)).unwrap_err();
        assert!(matches!(err, FolioError::InvalidAmount { .. }));
    }

    #[test]
    fn test_set_date_revalidates() {
        let mut price = Price::new("2024-01-01", dec!(150)).unwrap();

        price.set_date("2024-05-01").unwrap();
        assert_eq!(price.date(), Date::parse("2024-05-01").unwrap());

        // Invalid input leaves the previous date in place
        assert!(price.set_date("2024-13-01").is_err());
        assert_eq!(price.date(), Date::parse("2024-05-01").unwrap());
    }

    #[test]
    fn test_set_amount_revalidates() {
        let mut price = Price::new("2024-01-01", dec!(150)).unwrap();

        price.set_amount(dec!(160)).unwrap();
        assert_eq!(price.amount(), dec!(160));

        assert!(price.set_amount(dec!(-1)).is_err());
        assert_eq!(price.amount(), dec!(160));
    }

    #[test]
    fn test_display() {
        let price = Price::new("2024-01-01", dec!(150.5)).unwrap();
        assert_eq!(format!("{price}"), "2024-01-01 @ 150.5");
    }

    #[test]
    fn test_serde() {
        let price = Price::new("2024-01-01", dec!(150)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid_observations() {
        // Deserialization runs the same validation as construction
        let negative = r#"{ "date": "2024-01-01", "amount": -150.0 }"#;
        assert!(serde_json::from_str::<Price>(negative).is_err());

        let bad_date = r#"{ "date": "2024-02-30", "amount": 150.0 }"#;
        assert!(serde_json::from_str::<Price>(bad_date).is_err());
    }
}

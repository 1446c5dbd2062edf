//! Profit aggregation results.

use folio_core::types::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate result of a [`Portfolio::profit`](crate::Portfolio::profit)
/// query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Sum across contributing stocks of (end price - start price).
    pub total_profit: Decimal,

    /// Compound annual growth rate implied by the ratio of aggregate end
    /// value to start value over the elapsed period.
    ///
    /// `0.0` when the period is not positive or no start value was
    /// accumulated.
    pub annualized_return: f64,

    /// Stocks excluded from the aggregation because a price was missing
    /// at one of the requested dates.
    pub warnings: Vec<MissingPriceWarning>,
}

impl ProfitReport {
    /// Returns true if every stock contributed to the aggregation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A stock skipped during profit aggregation for lack of a price at one
/// of the requested dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingPriceWarning {
    /// Name of the skipped stock.
    pub stock: String,
    /// Requested start date.
    pub start_date: Date,
    /// Requested end date.
    pub end_date: Date,
    /// Which of the two lookups found no price.
    pub missing: MissingSide,
}

/// Identifies which requested lookup had no price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingSide {
    /// Only the start-date lookup failed.
    Start,
    /// Only the end-date lookup failed.
    End,
    /// Both lookups failed.
    Both,
}

impl fmt::Display for MissingPriceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.missing {
            MissingSide::Start => write!(
                f,
                "No price available for stock '{}' at {}",
                self.stock, self.start_date
            ),
            MissingSide::End => write!(
                f,
                "No price available for stock '{}' at {}",
                self.stock, self.end_date
            ),
            MissingSide::Both => write!(
                f,
                "No price available for stock '{}' at {} or {}",
                self.stock, self.start_date, self.end_date
            ),
        }
    }
}

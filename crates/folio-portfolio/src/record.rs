//! Raw price records at the ingestion boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw price observation as supplied by callers.
///
/// Records are plain data and carry no validation; conversion into a
/// validated [`Price`](folio_core::types::Price) happens when a stock is
/// built from them. The serde shape matches the ingestion format
/// `{ "date": "yyyy-mm-dd", "price": 150.0 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Observation date in "yyyy-mm-dd" form.
    pub date: String,
    /// Observed price.
    pub price: Decimal,
}

impl PriceRecord {
    /// Creates a new raw price record.
    #[must_use]
    pub fn new(date: impl Into<String>, price: Decimal) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}

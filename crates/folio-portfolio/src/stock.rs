//! A named, date-sorted series of price observations.

use folio_core::types::{Date, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::record::PriceRecord;

/// A named stock holding a date-sorted price series.
///
/// The series is kept sorted ascending by date after every mutation.
/// Duplicate dates are assumed absent but not enforced.
///
/// # Example
///
/// ```rust
/// use folio_portfolio::{PriceRecord, Stock};
/// use rust_decimal_macros::dec;
///
/// let mut stock = Stock::new(
///     "AAPL",
///     [
///         PriceRecord::new("2024-08-01", dec!(180)),
///         PriceRecord::new("2024-01-01", dec!(150)),
///     ],
/// )?;
/// stock.add_price("2024-05-01", dec!(160))?;
///
/// let dates: Vec<String> = stock.prices().iter().map(|(d, _)| d.to_string()).collect();
/// assert_eq!(dates, ["2024-01-01", "2024-05-01", "2024-08-01"]);
/// # Ok::<(), folio_portfolio::PortfolioError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StockParts")]
pub struct Stock {
    name: String,
    prices: Vec<Price>,
}

/// Mirror of [`Stock`] used to restore the sort invariant on
/// deserialization. Each element is already validated by the
/// [`Price`] deserializer.
#[derive(Deserialize)]
struct StockParts {
    name: String,
    prices: Vec<Price>,
}

impl From<StockParts> for Stock {
    fn from(parts: StockParts) -> Self {
        let mut stock = Self {
            name: parts.name,
            prices: parts.prices,
        };
        stock.sort_prices();
        stock
    }
}

impl Stock {
    /// Builds a stock from raw price records.
    ///
    /// Each record is converted into a validated [`Price`]; the series is
    /// then sorted ascending by date regardless of input order. An empty
    /// record set is accepted.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidPrice` if any record fails date or
    /// amount validation; no stock is constructed in that case.
    pub fn new(
        name: impl Into<String>,
        records: impl IntoIterator<Item = PriceRecord>,
    ) -> PortfolioResult<Self> {
        let name = name.into();
        let mut prices = Vec::new();
        for record in records {
            let price = Price::new(&record.date, record.price)
                .map_err(|e| PortfolioError::invalid_price(&name, e))?;
            prices.push(price);
        }

        let mut stock = Self { name, prices };
        stock.sort_prices();
        Ok(stock)
    }

    /// Returns the stock name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the amount recorded for an exact date, if any.
    ///
    /// Linear scan, exact match only; dates between observations are not
    /// interpolated.
    #[must_use]
    pub fn price_at(&self, date: Date) -> Option<Decimal> {
        self.prices
            .iter()
            .find(|p| p.date() == date)
            .map(Price::amount)
    }

    /// Adds a new observation and re-sorts the series.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidPrice` if the date or amount fails
    /// validation; the series is unchanged in that case.
    pub fn add_price(&mut self, date: &str, amount: Decimal) -> PortfolioResult<()> {
        let price =
            Price::new(date, amount).map_err(|e| PortfolioError::invalid_price(&self.name, e))?;
        self.prices.push(price);
        self.sort_prices();
        Ok(())
    }

    /// Returns a snapshot of the series as (date, amount) pairs in
    /// ascending date order.
    #[must_use]
    pub fn prices(&self) -> Vec<(Date, Decimal)> {
        self.prices.iter().map(|p| (p.date(), p.amount())).collect()
    }

    /// Returns the earliest observation date, or `None` for an empty
    /// series.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.prices.first().map(Price::date)
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn sort_prices(&mut self) {
        self.prices.sort_by_key(Price::date);
    }
}

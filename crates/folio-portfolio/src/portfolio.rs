//! Portfolio struct and profit aggregation.

use folio_core::types::Date;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;
use crate::profit::{MissingPriceWarning, MissingSide, ProfitReport};
use crate::record::PriceRecord;
use crate::stock::Stock;

/// Days per year used by the elapsed-time approximation.
///
/// Leap years are deliberately ignored to preserve the original
/// day-count formula.
const DAYS_PER_YEAR: f64 = 365.0;

/// An ordered collection of stocks with aggregate profit computation.
///
/// Stocks are kept sorted ascending by each one's earliest price date;
/// the order is re-derived after every addition. A stock with an empty
/// price series sorts after every dated stock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PortfolioParts")]
pub struct Portfolio {
    stocks: Vec<Stock>,
}

/// Mirror of [`Portfolio`] used to restore the stock ordering on
/// deserialization.
#[derive(Deserialize)]
struct PortfolioParts {
    stocks: Vec<Stock>,
}

impl From<PortfolioParts> for Portfolio {
    fn from(parts: PortfolioParts) -> Self {
        Self::with_stocks(parts.stocks)
    }
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a portfolio pre-seeded with stocks, sorted on entry.
    #[must_use]
    pub fn with_stocks(stocks: Vec<Stock>) -> Self {
        let mut portfolio = Self { stocks };
        portfolio.sort_stocks();
        portfolio
    }

    /// Builds a stock from raw records and adds it to the portfolio.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidPrice` if any record fails
    /// validation; the portfolio is unchanged in that case.
    pub fn add_stock(
        &mut self,
        name: impl Into<String>,
        records: impl IntoIterator<Item = PriceRecord>,
    ) -> PortfolioResult<()> {
        let stock = Stock::new(name, records)?;
        self.stocks.push(stock);
        self.sort_stocks();
        Ok(())
    }

    /// Returns the stocks in their current order.
    #[must_use]
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// Returns the number of stocks.
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.stocks.len()
    }

    /// Returns true if the portfolio has no stocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Computes total profit and annualized return between two dates.
    ///
    /// For each stock the prices at `start_date` and `end_date` are
    /// looked up by exact match. Stocks missing either price are skipped
    /// and reported in the returned warnings (also logged at warn
    /// level); the computation itself never fails.
    ///
    /// Elapsed time is the calendar-day difference divided by 365. The
    /// annualized return is `(end_value / start_value)^(1/years) - 1`,
    /// or `0.0` when the period is not positive or no start value was
    /// accumulated.
    #[must_use]
    pub fn profit(&self, start_date: Date, end_date: Date) -> ProfitReport {
        let mut total_profit = Decimal::ZERO;
        let mut start_value = Decimal::ZERO;
        let mut end_value = Decimal::ZERO;
        let mut warnings = Vec::new();

        for stock in &self.stocks {
            let start_price = stock.price_at(start_date);
            let end_price = stock.price_at(end_date);

            if let (Some(start_price), Some(end_price)) = (start_price, end_price) {
                start_value += start_price;
                end_value += end_price;
                total_profit += end_price - start_price;
            } else {
                let missing = match (start_price.is_some(), end_price.is_some()) {
                    (false, true) => MissingSide::Start,
                    (true, false) => MissingSide::End,
                    _ => MissingSide::Both,
                };
                let warning = MissingPriceWarning {
                    stock: stock.name().to_owned(),
                    start_date,
                    end_date,
                    missing,
                };
                log::warn!("{warning}");
                warnings.push(warning);
            }
        }

        let years = start_date.days_between(&end_date) as f64 / DAYS_PER_YEAR;

        ProfitReport {
            total_profit,
            annualized_return: annualized_return(start_value, end_value, years),
            warnings,
        }
    }

    /// Convenience wrapper over [`Portfolio::profit`] taking "yyyy-mm-dd"
    /// date strings.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either date string is malformed or
    /// not a real calendar date.
    pub fn profit_between(&self, start_date: &str, end_date: &str) -> PortfolioResult<ProfitReport> {
        let start = Date::parse(start_date)?;
        let end = Date::parse(end_date)?;
        Ok(self.profit(start, end))
    }

    // Empty series have no first date and sort after every dated stock,
    // so the ordering is total.
    fn sort_stocks(&mut self) {
        self.stocks
            .sort_by_key(|s| (s.first_date().is_none(), s.first_date()));
    }
}

/// Compound annual growth rate from aggregate start and end values.
///
/// Returns `0.0` when the period is not positive or the start value is
/// not positive, so the ratio is never formed with a zero denominator
/// and no NaN/infinity can escape.
fn annualized_return(start_value: Decimal, end_value: Decimal, years: f64) -> f64 {
    if years <= 0.0 || start_value <= Decimal::ZERO {
        return 0.0;
    }

    let Some(ratio) = (end_value / start_value).to_f64() else {
        return 0.0;
    };

    ratio.powf(1.0 / years) - 1.0
}

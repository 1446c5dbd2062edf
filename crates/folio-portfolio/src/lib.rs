//! # Folio Portfolio
//!
//! Stock price series and portfolio profit analytics.
//!
//! This crate models an investment portfolio of named stocks, each
//! holding a date-sorted series of validated price observations, and
//! computes total profit and annualized return between two dates.
//!
//! ## Design Philosophy
//!
//! - **Pure in-memory computation**: No I/O, no caching, deterministic
//!   results
//! - **Validate at the boundary**: Raw [`PriceRecord`]s become validated
//!   prices during stock construction; failures surface immediately
//! - **Structured warnings**: Stocks missing a price at a requested date
//!   are skipped and reported in the [`ProfitReport`] rather than only
//!   logged
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_portfolio::{Portfolio, PriceRecord};
//! use rust_decimal_macros::dec;
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add_stock(
//!     "AAPL",
//!     [
//!         PriceRecord::new("2024-01-01", dec!(150)),
//!         PriceRecord::new("2024-08-01", dec!(180)),
//!     ],
//! )?;
//!
//! let report = portfolio.profit_between("2024-01-01", "2024-08-01")?;
//! assert_eq!(report.total_profit, dec!(30));
//! # Ok::<(), folio_portfolio::PortfolioError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`record`] - Raw price records at the ingestion boundary
//! - [`stock`] - Named, date-sorted price series
//! - [`portfolio`] - Portfolio collection and profit aggregation
//! - [`profit`] - Profit report and missing-price warning types
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod portfolio;
pub mod profit;
pub mod record;
pub mod stock;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use portfolio::Portfolio;
pub use profit::{MissingPriceWarning, MissingSide, ProfitReport};
pub use record::PriceRecord;
pub use stock::Stock;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::Portfolio;
    pub use crate::profit::{MissingPriceWarning, MissingSide, ProfitReport};
    pub use crate::record::PriceRecord;
    pub use crate::stock::Stock;

    // Re-export commonly used types from dependencies
    pub use folio_core::types::{Date, Price};
    pub use rust_decimal::Decimal;
}

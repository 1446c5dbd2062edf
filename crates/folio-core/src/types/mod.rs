//! Domain types for portfolio analytics.
//!
//! This module provides type-safe representations of the core concepts:
//!
//! - [`Date`]: Calendar date with strict "yyyy-mm-dd" parsing
//! - [`Price`]: A validated (date, amount) price observation

mod date;
mod price;

pub use date::Date;
pub use price::Price;

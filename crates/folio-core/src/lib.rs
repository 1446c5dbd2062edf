//! # Folio Core
//!
//! Core domain types for the Folio equity portfolio analytics library.
//!
//! This crate provides the foundational building blocks used throughout Folio:
//!
//! - **Types**: Domain-specific types like [`Date`] and [`Price`]
//! - **Validation**: Strict "yyyy-mm-dd" date parsing and non-negative
//!   amount checks, enforced at construction and on every mutation
//! - **Errors**: Structured error types shared by the higher-level crates
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Validate Once**: A constructed [`Price`] can never hold an invalid
//!   date or a negative amount, even transiently
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let price = Price::new("2024-01-01", dec!(150))?;
//! assert_eq!(price.date().to_string(), "2024-01-01");
//! # Ok::<(), FolioError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

#[cfg(test)]
mod validation_tests;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FolioError, FolioResult};
    pub use crate::types::{Date, Price};
}

// Re-export commonly used types at crate root
pub use error::{FolioError, FolioResult};
pub use types::{Date, Price};

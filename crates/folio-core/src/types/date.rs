//! Date type for price-series calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{FolioError, FolioResult};

/// A calendar date for price-series calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing strict
/// "yyyy-mm-dd" parsing and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use folio_core::types::Date;
///
/// let date = Date::parse("2024-05-01").unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> FolioResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| FolioError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a date from a strict "yyyy-mm-dd" string.
    ///
    /// The input must match the 4-2-2 digit pattern exactly; the parsed
    /// year/month/day are then reconstructed into a calendar date, which
    /// rejects impossible dates such as "2024-02-30".
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidDate` if the string is malformed or
    /// does not name a real calendar date.
    pub fn parse(s: &str) -> FolioResult<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

        if !well_formed {
            return Err(FolioError::invalid_date(format!(
                "expected \"yyyy-mm-dd\", got \"{s}\""
            )));
        }

        // The pattern check guarantees each segment is pure ASCII digits.
        let year: i32 = s[0..4].parse().expect("validated digits");
        let month: u32 = s[5..7].parse().expect("validated digits");
        let day: u32 = s[8..10].parse().expect("validated digits");

        Self::from_ymd(year, month, day)
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl TryFrom<String> for Date {
    type Error = FolioError;

    /// Routes deserialization through the strict "yyyy-mm-dd" parser.
    fn try_from(s: String) -> FolioResult<Self> {
        Self::parse(&s)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

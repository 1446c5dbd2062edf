//! Validation Test Suite
//!
//! Cross-cutting tests for the date and amount validation rules,
//! including property-based coverage of the "yyyy-mm-dd" parser.

#[cfg(test)]
mod date_validation {
    use crate::types::Date;

    const VALID: &[&str] = &[
        "1999-12-31",
        "2000-02-29", // leap (divisible by 400)
        "2023-01-01",
        "2024-02-29", // leap
        "2024-12-31",
    ];

    const INVALID: &[&str] = &[
        "2023-13-01", // month out of range
        "2024-02-30", // impossible day
        "2023-02-29", // not a leap year
        "2100-02-29", // century non-leap year
        "24-01-01",   // two-digit year
        "2024-1-01",  // one-digit month
        "2024-01-1",  // one-digit day
        "2024-01-001",
        "2024/01/01",
        "2024-01-01T00:00:00",
        " 2024-01-01",
        "2024-01-01 ",
        "",
    ];

    #[test]
    fn test_accepts_real_calendar_dates() {
        for s in VALID {
            let date = Date::parse(s).unwrap();
            assert_eq!(&date.to_string(), s);
        }
    }

    #[test]
    fn test_rejects_malformed_and_impossible_dates() {
        for s in INVALID {
            assert!(Date::parse(s).is_err(), "expected rejection of {s:?}");
        }
    }
}

#[cfg(test)]
mod amount_validation {
    use crate::types::Price;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_boundary_amounts() {
        assert!(Price::new("2024-01-01", Decimal::ZERO).is_ok());
        assert!(Price::new("2024-01-01", dec!(0.0001)).is_ok());
        assert!(Price::new("2024-01-01", dec!(-0.0001)).is_err());
    }
}

#[cfg(test)]
mod properties {
    use crate::types::Date;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_accepts_all_real_dates(y in 1600i32..=9999, m in 1u32..=12, d in 1u32..=31) {
            let s = format!("{y:04}-{m:02}-{d:02}");
            match Date::from_ymd(y, m, d) {
                Ok(expected) => {
                    let parsed = Date::parse(&s);
                    prop_assert_eq!(parsed.unwrap(), expected);
                }
                // Day out of range for the month: the string form must
                // be rejected too.
                Err(_) => prop_assert!(Date::parse(&s).is_err()),
            }
        }

        #[test]
        fn parse_rejects_out_of_range_months(y in 1600i32..=9999, m in 13u32..=99, d in 1u32..=28) {
            let s = format!("{y:04}-{m:02}-{d:02}");
            prop_assert!(Date::parse(&s).is_err());
        }

        #[test]
        fn parse_display_roundtrip(y in 1600i32..=9999, m in 1u32..=12, d in 1u32..=28) {
            let s = format!("{y:04}-{m:02}-{d:02}");
            let date = Date::parse(&s).unwrap();
            prop_assert_eq!(date.to_string(), s);
        }

        #[test]
        fn parse_rejects_wrong_shapes(s in "[0-9a-z ]{0,12}") {
            // No separator dashes at positions 4 and 7
            prop_assert!(Date::parse(&s).is_err());
        }
    }
}

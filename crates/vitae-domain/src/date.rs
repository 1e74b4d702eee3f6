//! Structured date values produced by the extraction pipeline

use crate::DomainError;
use std::fmt;

/// Precision of a structured date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Only the year is known
    Year,
    /// Day, month and year are known
    Day,
}

/// A Gregorian date with either year or day precision
///
/// Invariants (enforced by [`StructuredDate::year_month_day`]):
/// `1 <= month <= 12`, `1 <= day <= 31`. The day is not checked against the
/// length of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuredDate {
    /// Year-only date
    Year(i32),

    /// Full date
    YearMonthDay {
        /// Year
        year: i32,
        /// Month, 1-12
        month: u8,
        /// Day of month, 1-31
        day: u8,
    },
}

impl StructuredDate {
    /// Create a full date, validating month and day ranges
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::StructuredDate;
    ///
    /// let date = StructuredDate::year_month_day(1923, 1, 5).unwrap();
    /// assert_eq!(date.to_string(), "1923-01-05");
    /// assert!(StructuredDate::year_month_day(1923, 13, 5).is_err());
    /// ```
    pub fn year_month_day(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidDate(format!(
                "month {} out of range 1-12",
                month
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(DomainError::InvalidDate(format!(
                "day {} out of range 1-31",
                day
            )));
        }
        Ok(StructuredDate::YearMonthDay { year, month, day })
    }

    /// The year component
    pub fn year(&self) -> i32 {
        match self {
            StructuredDate::Year(year) => *year,
            StructuredDate::YearMonthDay { year, .. } => *year,
        }
    }

    /// Precision of this date
    pub fn precision(&self) -> DatePrecision {
        match self {
            StructuredDate::Year(_) => DatePrecision::Year,
            StructuredDate::YearMonthDay { .. } => DatePrecision::Day,
        }
    }
}

impl fmt::Display for StructuredDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuredDate::Year(year) => write!(f, "{:04}", year),
            StructuredDate::YearMonthDay { year, month, day } => {
                write!(f, "{:04}-{:02}-{:02}", year, month, day)
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every in-range component triple is a valid date
        #[test]
        fn test_valid_components_accepted(year in 1000i32..=9999, month in 1u8..=12, day in 1u8..=31) {
            let date = StructuredDate::year_month_day(year, month, day).unwrap();
            prop_assert_eq!(date.year(), year);
            prop_assert_eq!(date.precision(), DatePrecision::Day);
        }

        /// Property: out-of-range months are always refused
        #[test]
        fn test_invalid_month_refused(month in 13u8..=255, day in 1u8..=31) {
            prop_assert!(StructuredDate::year_month_day(1900, month, day).is_err());
        }

        /// Property: display of a four-digit date is always 10 characters
        #[test]
        fn test_display_width(year in 1000i32..=9999, month in 1u8..=12, day in 1u8..=31) {
            let date = StructuredDate::year_month_day(year, month, day).unwrap();
            prop_assert_eq!(date.to_string().len(), 10);
        }
    }
}

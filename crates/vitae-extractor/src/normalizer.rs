//! Conversion of raw date tokens into structured dates

use crate::error::ExtractorError;
use vitae_domain::{Locale, StructuredDate};

/// Normalize a date token of the given locale
///
/// Periods are removed first. Four remaining digits are a year; anything
/// else must be exactly `day month year`, where `month` is one of the
/// locale's month names (case-sensitive, no abbreviations).
///
/// # Examples
///
/// ```
/// use vitae_extractor::normalize;
/// use vitae_domain::{Locale, StructuredDate};
///
/// assert_eq!(normalize(Locale::Swedish, "1923").unwrap(), StructuredDate::Year(1923));
/// assert_eq!(
///     normalize(Locale::Danish, "5. januar 1923").unwrap(),
///     StructuredDate::year_month_day(1923, 1, 5).unwrap()
/// );
/// assert!(normalize(Locale::Swedish, "12 jan 1923").is_err());
/// ```
pub fn normalize(locale: Locale, token: &str) -> Result<StructuredDate, ExtractorError> {
    let cleaned = token.replace('.', "");
    let cleaned = cleaned.trim();

    if is_digits(cleaned, 4) {
        return Ok(StructuredDate::Year(parse_year(token, cleaned)?));
    }

    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(ExtractorError::malformed(
            token,
            format!("expected day, month and year, found {} part(s)", parts.len()),
        ));
    };

    let day = parse_day(token, day)?;
    let month = locale.month_number(month).ok_or_else(|| {
        ExtractorError::malformed(token, format!("'{}' is not a {} month name", month, locale))
    })?;
    let year = parse_year(token, year)?;

    StructuredDate::year_month_day(year, month, day)
        .map_err(|e| ExtractorError::malformed(token, e.to_string()))
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_year(token: &str, year: &str) -> Result<i32, ExtractorError> {
    if !is_digits(year, 4) {
        return Err(ExtractorError::malformed(
            token,
            format!("year '{}' is not four digits", year),
        ));
    }
    year.parse()
        .map_err(|_| ExtractorError::malformed(token, format!("year '{}' is not a number", year)))
}

fn parse_day(token: &str, day: &str) -> Result<u8, ExtractorError> {
    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractorError::malformed(
            token,
            format!("day '{}' is not a number", day),
        ));
    }
    day.parse()
        .map_err(|_| ExtractorError::malformed(token, format!("day '{}' is not a number", day)))
}

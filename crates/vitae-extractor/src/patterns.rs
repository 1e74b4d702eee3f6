//! Compiled long/short date patterns per locale
//!
//! One matcher shape serves every purpose: it is parameterized by an optional
//! marker phrase. With the birth or death marker it locates a section of the
//! article; without a marker it strips a located section down to the date.

use crate::error::ExtractorError;
use crate::types::{DateForm, DateMatch};
use regex::Regex;
use vitae_domain::{DaySeparator, EventKind, Locale};

/// Long-form and short-form regular expressions, searched long first
#[derive(Debug, Clone)]
pub struct DatePatterns {
    long: Regex,
    short: Regex,
}

impl DatePatterns {
    /// Compile the patterns for a locale, optionally anchored on a marker phrase
    pub fn compile(locale: Locale, marker: Option<&str>) -> Result<Self, ExtractorError> {
        let separator = match locale.profile().day_separator {
            DaySeparator::Space => r"\s+",
            DaySeparator::Period => r"\.\s+",
        };
        let long = format!(r"[0-9]{{1,2}}{}\p{{Ll}}+\s+[0-9]{{4}}\b", separator);
        let short = r"[0-9]{4}\b".to_string();

        let (long, short) = match marker {
            Some(marker) => {
                let prefix = format!(r"\b{}\s+", regex::escape(marker));
                (format!("{}{}", prefix, long), format!("{}{}", prefix, short))
            }
            None => (long, short),
        };

        Ok(Self {
            long: Regex::new(&long)?,
            short: Regex::new(&short)?,
        })
    }

    /// First long-form match if any exists anywhere, else first short-form match
    ///
    /// A long-form match wins even when a short-form match occurs earlier in
    /// the text.
    pub fn find<'t>(&self, text: &'t str) -> Option<DateMatch<'t>> {
        if let Some(m) = self.long.find(text) {
            return Some(DateMatch {
                text: m.as_str(),
                form: DateForm::Long,
            });
        }
        self.short.find(text).map(|m| DateMatch {
            text: m.as_str(),
            form: DateForm::Short,
        })
    }
}

/// Every pattern needed to process articles of one locale
///
/// Built eagerly: each locale always has birth, death and token patterns, so
/// there is no kind for which a lookup can fall through.
#[derive(Debug, Clone)]
pub struct PatternTable {
    locale: Locale,
    birth: DatePatterns,
    death: DatePatterns,
    token: DatePatterns,
}

impl PatternTable {
    /// Compile the table for a locale
    pub fn new(locale: Locale) -> Result<Self, ExtractorError> {
        Ok(Self {
            locale,
            birth: DatePatterns::compile(locale, Some(locale.marker(EventKind::Birth)))?,
            death: DatePatterns::compile(locale, Some(locale.marker(EventKind::Death)))?,
            token: DatePatterns::compile(locale, None)?,
        })
    }

    /// Locale this table was compiled for
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Marker-anchored patterns for a kind
    pub fn section(&self, kind: EventKind) -> &DatePatterns {
        match kind {
            EventKind::Birth => &self.birth,
            EventKind::Death => &self.death,
        }
    }

    /// Marker-free patterns used to isolate the date token
    pub fn token(&self) -> &DatePatterns {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_compiles() {
        for locale in Locale::ALL {
            assert!(PatternTable::new(locale).is_ok(), "{} should compile", locale);
        }
    }

    #[test]
    fn test_long_preferred_over_earlier_short() {
        let patterns = DatePatterns::compile(Locale::Swedish, Some("född")).unwrap();
        let text = "Han var född 1923 enligt vissa källor, men född 5 januari 1924 enligt andra.";
        let found = patterns.find(text).unwrap();
        assert_eq!(found.text, "född 5 januari 1924");
        assert_eq!(found.form, DateForm::Long);
    }

    #[test]
    fn test_period_separator() {
        let patterns = DatePatterns::compile(Locale::Norwegian, Some("født")).unwrap();
        let found = patterns.find("Ola (født 17. mai 1905 i Oslo)").unwrap();
        assert_eq!(found.text, "født 17. mai 1905");

        // Without the period the long form does not apply, and no short form exists
        assert!(patterns.find("født 17 mai 1905").is_none());
    }

    #[test]
    fn test_marker_needs_word_boundary() {
        let patterns = DatePatterns::compile(Locale::Polish, Some("ur.")).unwrap();
        assert!(patterns.find("mur. 1923").is_none());
        assert_eq!(patterns.find("(ur. 1923)").unwrap().text, "ur. 1923");
    }

    #[test]
    fn test_year_must_be_exactly_four_digits() {
        let patterns = DatePatterns::compile(Locale::Swedish, Some("född")).unwrap();
        assert!(patterns.find("född 19234").is_none());
        assert!(patterns.find("född 192").is_none());
    }

    #[test]
    fn test_unicode_lowercase_month_token() {
        let patterns = DatePatterns::compile(Locale::Polish, Some("zm.")).unwrap();
        let found = patterns.find("zm. 3 października 1990 w Krakowie").unwrap();
        assert_eq!(found.text, "zm. 3 października 1990");
    }

    #[test]
    fn test_capitalized_month_is_not_a_long_form() {
        let patterns = DatePatterns::compile(Locale::Swedish, Some("född")).unwrap();
        assert!(patterns.find("född 5 Januari 1923").is_none());
    }

    #[test]
    fn test_marker_free_token_patterns() {
        let patterns = DatePatterns::compile(Locale::Danish, None).unwrap();
        assert_eq!(patterns.find("død 4. marts 1950").unwrap().text, "4. marts 1950");
        assert_eq!(patterns.find("død 1950").unwrap().text, "1950");
        assert!(patterns.find("død").is_none());
    }
}

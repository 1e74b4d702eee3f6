//! Locale lexicon - month names and date markers per encyclopedia language
//!
//! Every supported language is a static [`LocaleProfile`] record. Adding a
//! language means adding a variant and a record; no code path branches on the
//! language anywhere else.

use crate::{DomainError, EventKind};
use std::fmt;
use std::str::FromStr;

/// How the day number is separated from the month name in a long-form date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySeparator {
    /// `5 januari 1923`
    Space,
    /// `5. januar 1923`
    Period,
}

/// Immutable lexicon record for one locale
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleProfile {
    /// Two-letter language code (also the encyclopedia subdomain)
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Month names, index 0 = January
    ///
    /// Matching is case-sensitive and exact; the names are stored in the form
    /// they take inside a date (genitive for Polish).
    pub months: [&'static str; 12],

    /// Word preceding a birth date
    pub birth_marker: &'static str,

    /// Word preceding a death date
    pub death_marker: &'static str,

    /// Day/month separator in long-form dates
    pub day_separator: DaySeparator,

    /// Knowledge-base item of this language's encyclopedia edition
    pub wiki_item: &'static str,
}

static SWEDISH: LocaleProfile = LocaleProfile {
    code: "sv",
    name: "Swedish",
    months: [
        "januari", "februari", "mars", "april", "maj", "juni",
        "juli", "augusti", "september", "oktober", "november", "december",
    ],
    birth_marker: "född",
    death_marker: "död",
    day_separator: DaySeparator::Space,
    wiki_item: "Q169514",
};

static NORWEGIAN: LocaleProfile = LocaleProfile {
    code: "no",
    name: "Norwegian",
    months: [
        "januar", "februar", "mars", "april", "mai", "juni",
        "juli", "august", "september", "oktober", "november", "desember",
    ],
    birth_marker: "født",
    death_marker: "død",
    day_separator: DaySeparator::Period,
    wiki_item: "Q191769",
};

static DANISH: LocaleProfile = LocaleProfile {
    code: "da",
    name: "Danish",
    months: [
        "januar", "februar", "marts", "april", "maj", "juni",
        "juli", "august", "september", "oktober", "november", "december",
    ],
    birth_marker: "født",
    death_marker: "død",
    day_separator: DaySeparator::Period,
    wiki_item: "Q181163",
};

static POLISH: LocaleProfile = LocaleProfile {
    code: "pl",
    name: "Polish",
    months: [
        "stycznia", "lutego", "marca", "kwietnia", "maja", "czerwca",
        "lipca", "sierpnia", "września", "października", "listopada", "grudnia",
    ],
    birth_marker: "ur.",
    death_marker: "zm.",
    day_separator: DaySeparator::Space,
    wiki_item: "Q1551807",
};

/// A supported encyclopedia language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// `sv`
    Swedish,
    /// `no` (Bokmål)
    Norwegian,
    /// `da`
    Danish,
    /// `pl`
    Polish,
}

impl Locale {
    /// All supported locales, in display order
    pub const ALL: [Locale; 4] = [
        Locale::Swedish,
        Locale::Norwegian,
        Locale::Danish,
        Locale::Polish,
    ];

    /// Resolve a two-letter language code
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::Locale;
    ///
    /// assert_eq!(Locale::from_code("sv").unwrap(), Locale::Swedish);
    /// assert!(Locale::from_code("de").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| DomainError::UnsupportedLocale(code.to_string()))
    }

    /// The lexicon record for this locale
    pub fn profile(&self) -> &'static LocaleProfile {
        match self {
            Locale::Swedish => &SWEDISH,
            Locale::Norwegian => &NORWEGIAN,
            Locale::Danish => &DANISH,
            Locale::Polish => &POLISH,
        }
    }

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        self.profile().code
    }

    /// Ordered month names (index 0 = January)
    pub fn months(&self) -> &'static [&'static str; 12] {
        &self.profile().months
    }

    /// Marker phrase preceding a date of the given kind
    pub fn marker(&self, kind: EventKind) -> &'static str {
        let profile = self.profile();
        match kind {
            EventKind::Birth => profile.birth_marker,
            EventKind::Death => profile.death_marker,
        }
    }

    /// 1-based month number for an exact month name
    pub fn month_number(&self, name: &str) -> Option<u8> {
        self.months()
            .iter()
            .position(|month| *month == name)
            .map(|index| index as u8 + 1)
    }

    /// Month name for a 1-based month number
    pub fn month_name(&self, month: u8) -> Option<&'static str> {
        match month {
            1..=12 => Some(self.months()[usize::from(month) - 1]),
            _ => None,
        }
    }

    /// Site identifier used for site links (e.g. `svwiki`)
    pub fn wiki_site(&self) -> String {
        format!("{}wiki", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

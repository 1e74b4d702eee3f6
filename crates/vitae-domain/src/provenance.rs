//! Provenance attached to submitted claims

use crate::Locale;

/// Property meaning "imported from Wikimedia project"
pub const IMPORTED_FROM: &str = "P143";

/// Reference recording which encyclopedia edition a claim came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Reference property
    pub property: &'static str,

    /// Item of the source encyclopedia edition
    pub source_item: &'static str,

    /// Source locale
    pub locale: Locale,
}

impl Provenance {
    /// "Imported from" the encyclopedia edition of `locale`
    pub fn imported_from(locale: Locale) -> Self {
        Self {
            property: IMPORTED_FROM,
            source_item: locale.profile().wiki_item,
            locale,
        }
    }
}

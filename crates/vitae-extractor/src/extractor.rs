//! Core Extractor implementation

use crate::error::ExtractorError;
use crate::locator::{extract_token, locate_section};
use crate::normalizer::normalize;
use crate::patterns::PatternTable;
use crate::types::{Extraction, KindExtraction};
use tracing::{debug, warn};
use vitae_domain::{EventKind, Locale, Outcome, Rejection};
use vitae_gatekeeper::Gatekeeper;

/// The Extractor turns article prose into birth and death date outcomes
///
/// Pure and synchronous: patterns are compiled once in [`Extractor::new`] and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Extractor {
    table: PatternTable,
    gatekeeper: Gatekeeper,
}

impl Extractor {
    /// Create a new Extractor for a locale
    pub fn new(locale: Locale, gatekeeper: Gatekeeper) -> Result<Self, ExtractorError> {
        Ok(Self {
            table: PatternTable::new(locale)?,
            gatekeeper,
        })
    }

    /// Create an Extractor from a language code with the default plausibility rules
    ///
    /// # Errors
    ///
    /// Fails with an unsupported-locale error for codes outside the supported set.
    pub fn for_code(code: &str) -> Result<Self, ExtractorError> {
        let locale = Locale::from_code(code)?;
        Self::new(locale, Gatekeeper::default_config())
    }

    /// Locale this extractor handles
    pub fn locale(&self) -> Locale {
        self.table.locale()
    }

    /// Classify one kind of date in the text
    pub fn extract(&self, kind: EventKind, text: &str) -> Outcome {
        self.extract_detailed(kind, text).outcome
    }

    /// Classify both kinds of date in the text
    pub fn extract_all(&self, text: &str) -> Extraction {
        Extraction {
            birth: self.extract_detailed(EventKind::Birth, text),
            death: self.extract_detailed(EventKind::Death, text),
        }
    }

    /// Classify one kind of date, keeping the located section and token
    pub fn extract_detailed(&self, kind: EventKind, text: &str) -> KindExtraction {
        let Some(section) = locate_section(&self.table, kind, text) else {
            debug!(%kind, locale = %self.locale(), "no marker-adjacent date");
            return KindExtraction {
                kind,
                section: None,
                token: None,
                outcome: Outcome::NotFound,
            };
        };

        let Some(token) = extract_token(&self.table, section.text) else {
            warn!(%kind, section = section.text, "located section contains no date token");
            return KindExtraction {
                kind,
                section: Some(section.text.to_string()),
                token: None,
                outcome: Outcome::NotFound,
            };
        };

        debug!(%kind, section = section.text, token = token.text, form = ?token.form, "date token isolated");

        let outcome = match normalize(self.locale(), token.text) {
            Ok(date) => self.gatekeeper.classify(date),
            Err(ExtractorError::MalformedDateToken { token, reason }) => {
                debug!(%kind, %token, %reason, "malformed date token");
                Outcome::Rejected(Rejection::Malformed { token, reason })
            }
            Err(e) => Outcome::Rejected(Rejection::Malformed {
                token: token.text.to_string(),
                reason: e.to_string(),
            }),
        };

        KindExtraction {
            kind,
            section: Some(section.text.to_string()),
            token: Some(token.text.to_string()),
            outcome,
        }
    }
}

//! Intermediate and result types for extraction

use vitae_domain::{EventKind, Outcome};

/// Shape of a matched date mention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    /// Day, month name and year
    Long,
    /// Bare four-digit year
    Short,
}

/// A span of article text matched by a date pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch<'t> {
    /// Matched text
    pub text: &'t str,

    /// Which pattern matched
    pub form: DateForm,
}

/// Every intermediate step of extracting one kind of date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindExtraction {
    /// Birth or death
    pub kind: EventKind,

    /// Marker-adjacent section located in the article
    pub section: Option<String>,

    /// Date token isolated from the section
    pub token: Option<String>,

    /// Final classification
    pub outcome: Outcome,
}

/// Birth and death outcomes for one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Birth date extraction
    pub birth: KindExtraction,

    /// Death date extraction
    pub death: KindExtraction,
}

impl Extraction {
    /// Extraction for a kind
    pub fn get(&self, kind: EventKind) -> &KindExtraction {
        match kind {
            EventKind::Birth => &self.birth,
            EventKind::Death => &self.death,
        }
    }

    /// Outcome for a kind
    pub fn outcome(&self, kind: EventKind) -> &Outcome {
        &self.get(kind).outcome
    }
}

//! Date claims and the subjects they are made about

use crate::{DomainError, Locale, StructuredDate};
use std::fmt;

/// Which life event a date belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// Date of birth
    Birth,
    /// Date of death
    Death,
}

impl EventKind {
    /// Both kinds, in processing order
    pub const ALL: [EventKind; 2] = [EventKind::Birth, EventKind::Death];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Birth => "birth",
            EventKind::Death => "death",
        }
    }

    /// Knowledge-base property holding this kind of date
    pub fn property(&self) -> &'static str {
        match self {
            EventKind::Birth => "P569",
            EventKind::Death => "P570",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of a knowledge-base item (`Q<digits>`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Parse an item identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::ItemId;
    ///
    /// assert!(ItemId::new("Q42").is_ok());
    /// assert!(ItemId::new("P569").is_err());
    /// assert!(ItemId::new("Q").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let valid = value
            .strip_prefix('Q')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        if valid {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidItemId(value))
        }
    }

    /// Identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the knowledge base knows about a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    /// Linked item
    pub item: ItemId,

    /// Whether the item is tagged as a human individual
    pub is_human: bool,

    /// Kinds for which a date claim already exists
    pub existing: Vec<EventKind>,
}

impl SubjectRecord {
    /// Whether a claim of this kind already exists
    pub fn has_claim(&self, kind: EventKind) -> bool {
        self.existing.contains(&kind)
    }
}

/// A birth or death date ready to be submitted
///
/// Pure data: building a claim has no side effects. Whether a claim of the
/// same kind already exists is the knowledge base's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateClaim {
    /// Article title the date was extracted from
    pub title: String,

    /// Item the claim is made on
    pub item: ItemId,

    /// Birth or death
    pub kind: EventKind,

    /// The accepted date
    pub date: StructuredDate,

    /// Locale of the source article
    pub locale: Locale,
}

impl DateClaim {
    /// Create a new claim
    pub fn new(
        title: impl Into<String>,
        item: ItemId,
        kind: EventKind,
        date: StructuredDate,
        locale: Locale,
    ) -> Self {
        Self {
            title: title.into(),
            item,
            kind,
            date,
            locale,
        }
    }

    /// Property the claim is stored under
    pub fn property(&self) -> &'static str {
        self.kind.property()
    }
}

impl fmt::Display for DateClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} (from {}wiki '{}')",
            self.item,
            self.property(),
            self.date,
            self.locale,
            self.title
        )
    }
}

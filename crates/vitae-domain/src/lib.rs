//! Vitae Domain Layer
//!
//! This crate contains the core vocabulary shared by every other Vitae crate:
//! the locale lexicon, the structured date value, extraction outcomes, the
//! date claim handed to a knowledge base, and the trait boundaries for the
//! external collaborators (article text and knowledge base).
//!
//! ## Key Concepts
//!
//! - **Locale**: a supported encyclopedia language with its month names and markers
//! - **StructuredDate**: a year, or a full day/month/year
//! - **Outcome**: accepted date, nothing found, or rejected
//! - **DateClaim**: a birth or death date ready for submission, with its source locale
//! - **Provenance**: the reference attached to a submitted claim
//!
//! ## Architecture
//!
//! - No I/O and no shared mutable state
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod date;
pub mod error;
pub mod locale;
pub mod outcome;
pub mod provenance;
pub mod traits;

// Re-exports for convenience
pub use claim::{DateClaim, EventKind, ItemId, SubjectRecord};
pub use date::{DatePrecision, StructuredDate};
pub use error::DomainError;
pub use locale::{DaySeparator, Locale, LocaleProfile};
pub use outcome::{Outcome, Rejection};
pub use provenance::Provenance;

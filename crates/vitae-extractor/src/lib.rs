//! Vitae Extractor
//!
//! Locale-aware extraction of birth and death dates from encyclopedia prose.
//!
//! # Overview
//!
//! Articles state life dates next to a marker word ("född", "født", "ur." …).
//! The Extractor finds the first marker-adjacent date, preferring the long
//! form (day, month name, year) over the short form (bare year), isolates the
//! date token, normalizes it into a [`StructuredDate`](vitae_domain::StructuredDate)
//! and runs it through the plausibility [`Gatekeeper`](vitae_gatekeeper::Gatekeeper).
//!
//! # Architecture
//!
//! ```text
//! Text → Section Locator → Token Extractor → Normalizer → Gatekeeper → Outcome
//! ```
//!
//! # Example Usage
//!
//! ```
//! use vitae_extractor::Extractor;
//! use vitae_domain::{EventKind, Outcome, StructuredDate};
//!
//! let extractor = Extractor::for_code("sv").unwrap();
//! let outcome = extractor.extract(EventKind::Birth, "Greta Garbo, född 18 september 1905 i Stockholm");
//!
//! assert_eq!(
//!     outcome,
//!     Outcome::Accepted(StructuredDate::year_month_day(1905, 9, 18).unwrap())
//! );
//! ```

#![warn(missing_docs)]

mod error;
mod types;
mod patterns;
mod locator;
mod normalizer;
mod extractor;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use types::{DateForm, DateMatch, Extraction, KindExtraction};
pub use patterns::{DatePatterns, PatternTable};
pub use locator::{extract_token, locate_section};
pub use normalizer::normalize;
pub use extractor::Extractor;

//! Vitae Gatekeeper
//!
//! Plausibility filter for extracted dates.
//!
//! Short numeric matches are prone to false positives against unrelated
//! four-digit numbers in prose (identifiers, other years mentioned nearby).
//! The Gatekeeper drops any date whose year is below a minimum threshold
//! (1800 unless configured otherwise). A dropped date is an ordinary outcome,
//! not an error.
//!
//! # Examples
//!
//! ```
//! use vitae_gatekeeper::{Gatekeeper, ValidationStatus};
//! use vitae_domain::StructuredDate;
//!
//! let gatekeeper = Gatekeeper::default_config();
//!
//! let result = gatekeeper.validate(&StructuredDate::Year(1923));
//! assert_eq!(result.status, ValidationStatus::Accepted);
//!
//! let result = gatekeeper.validate(&StructuredDate::Year(1650));
//! assert_eq!(result.status, ValidationStatus::Rejected);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{Gatekeeper, ValidationResult, ValidationStatus, RejectionReason};
pub use error::GatekeeperError;
pub use config::{ValidationConfig, MIN_PLAUSIBLE_YEAR};

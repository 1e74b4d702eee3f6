//! Domain error types

use thiserror::Error;

/// Errors raised while constructing domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The language code is not one of the supported locales
    #[error("Unsupported locale: '{0}' (supported: sv, no, da, pl)")]
    UnsupportedLocale(String),

    /// A date component is out of range
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// An item identifier is not of the form `Q<digits>`
    #[error("Invalid item id: '{0}'")]
    InvalidItemId(String),
}

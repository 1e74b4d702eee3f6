//! Error types for the Extractor

use thiserror::Error;
use vitae_domain::DomainError;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Locale resolution or date construction failed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A date token has no plausible day/month/year structure
    #[error("Malformed date token '{token}': {reason}")]
    MalformedDateToken {
        /// Raw token text
        token: String,
        /// What was wrong with it
        reason: String,
    },

    /// A locale pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl ExtractorError {
    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        ExtractorError::MalformedDateToken {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

//! Error types for the wiki clients

use thiserror::Error;
use vitae_domain::DomainError;

/// Errors that can occur while talking to MediaWiki or Wikibase
#[derive(Error, Debug)]
pub enum WikiError {
    /// Network or HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error object
    #[error("API error {code}: {info}")]
    Api {
        /// Machine-readable error code
        code: String,
        /// Human-readable description
        info: String,
    },

    /// The requested article does not exist
    #[error("Article not found: {0}")]
    MissingPage(String),

    /// Login failed or no credentials were configured
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A returned identifier was not valid
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl WikiError {
    /// Whether retrying the same read request might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            WikiError::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| s.is_server_error() || s.as_u16() == 429)
            }
            WikiError::Api { code, .. } => code == "maxlag" || code == "ratelimited",
            _ => false,
        }
    }
}

/// Turn an `{"error": {...}}` API payload into a [`WikiError::Api`]
pub(crate) fn check_api_error(body: &serde_json::Value) -> Result<(), WikiError> {
    if let Some(error) = body.get("error") {
        let field = |name: &str| {
            error
                .get(name)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        return Err(WikiError::Api {
            code: field("code"),
            info: field("info"),
        });
    }
    Ok(())
}

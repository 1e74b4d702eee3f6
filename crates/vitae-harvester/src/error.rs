//! Error types for harvest runs

use thiserror::Error;

/// Errors that can occur while harvesting a subject
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarvestError {
    /// Article text could not be fetched
    #[error("Article error: {0}")]
    Article(String),

    /// Knowledge-base lookup or write failed
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

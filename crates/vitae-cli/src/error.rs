//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Harvest setup error
    #[error(transparent)]
    Harvest(#[from] vitae_harvester::HarvestError),

    /// Domain error (unsupported locale)
    #[error(transparent)]
    Domain(#[from] vitae_domain::DomainError),

    /// Pattern compilation error
    #[error(transparent)]
    Extractor(#[from] vitae_extractor::ExtractorError),

    /// Plausibility configuration error
    #[error(transparent)]
    Gatekeeper(#[from] vitae_gatekeeper::GatekeeperError),

    /// HTTP client setup error
    #[error(transparent)]
    Wiki(#[from] vitae_wiki::WikiError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vitae_gatekeeper::ValidationConfig;
use vitae_harvester::HarvestConfig;
use vitae_wiki::WikiConfig;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Batch pacing and dry-run mode
    #[serde(default)]
    pub harvest: HarvestConfig,

    /// Plausibility threshold
    #[serde(default)]
    pub validation: ValidationConfig,

    /// API endpoints and bot account
    #[serde(default)]
    pub wiki: WikiConfig,

    /// Terminal output
    #[serde(default)]
    pub output: OutputSettings,
}

/// Terminal output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".vitae").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// if present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.harvest.validate()?;
        self.validation.validate()?;
        self.wiki.validate().map_err(CliError::Config)?;
        Ok(())
    }
}

//! Configuration for harvest runs

use crate::HarvestError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Harvester
///
/// # Examples
///
/// ```
/// use vitae_harvester::HarvestConfig;
///
/// let config = HarvestConfig::default();
/// assert_eq!(config.min_delay_secs, 13);
/// assert_eq!(config.max_delay_secs, 65);
/// assert!(!config.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Shortest pause after a write (in seconds)
    #[serde(default = "default_min_delay")]
    pub min_delay_secs: u64,

    /// Longest pause after a write (in seconds)
    #[serde(default = "default_max_delay")]
    pub max_delay_secs: u64,

    /// Dry-run mode: log claims that would be written without writing them
    #[serde(default)]
    pub dry_run: bool,
}

fn default_min_delay() -> u64 {
    13
}

fn default_max_delay() -> u64 {
    65
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: default_min_delay(),
            max_delay_secs: default_max_delay(),
            dry_run: false,
        }
    }
}

impl HarvestConfig {
    /// Configuration without pauses, for tests and local runs
    pub fn unthrottled() -> Self {
        Self {
            min_delay_secs: 0,
            max_delay_secs: 0,
            dry_run: false,
        }
    }

    /// Shortest pause as Duration
    pub fn min_delay(&self) -> Duration {
        Duration::from_secs(self.min_delay_secs)
    }

    /// Longest pause as Duration
    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), HarvestError> {
        if self.min_delay_secs > self.max_delay_secs {
            return Err(HarvestError::Config(format!(
                "min_delay_secs ({}) must not exceed max_delay_secs ({})",
                self.min_delay_secs, self.max_delay_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(HarvestConfig::default().validate().is_ok());
        assert!(HarvestConfig::unthrottled().validate().is_ok());
    }

    #[test]
    fn test_inverted_delays() {
        let config = HarvestConfig {
            min_delay_secs: 30,
            max_delay_secs: 10,
            dry_run: false,
        };
        assert!(matches!(config.validate(), Err(HarvestError::Config(_))));
    }

    #[test]
    fn test_partial_toml() {
        let config: HarvestConfig = toml::from_str("dry_run = true").unwrap();
        assert!(config.dry_run);
        assert_eq!(config.min_delay(), Duration::from_secs(13));
        assert_eq!(config.max_delay(), Duration::from_secs(65));
    }
}

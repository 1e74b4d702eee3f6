//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Minimum year accepted by default
pub const MIN_PLAUSIBLE_YEAR: i32 = 1800;

/// Configuration for plausibility rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Dates with a year below this value are rejected
    #[serde(default = "default_min_year")]
    pub min_year: i32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_year: MIN_PLAUSIBLE_YEAR,
        }
    }
}

impl ValidationConfig {
    /// Validate the configuration
    ///
    /// The threshold must itself be a four-digit year.
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if !(1000..=9999).contains(&self.min_year) {
            return Err(GatekeeperError::Config(format!(
                "min_year must be a four-digit year, got {}",
                self.min_year
            )));
        }
        Ok(())
    }
}

fn default_min_year() -> i32 {
    MIN_PLAUSIBLE_YEAR
}

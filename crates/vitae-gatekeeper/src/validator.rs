//! Date plausibility checks

use crate::{GatekeeperError, ValidationConfig};
use vitae_domain::{Outcome, Rejection, StructuredDate};

/// Result of date validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the date passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Date accepted
    Accepted,

    /// Date rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Year is earlier than the configured minimum
    BelowMinimumYear {
        /// Year of the date
        year: i32,
        /// Configured minimum
        min_year: i32,
    },
}

/// The Gatekeeper decides whether an extracted date is actionable
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ValidationConfig) -> Result<Self, GatekeeperError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a date against the configured rules
    pub fn validate(&self, date: &StructuredDate) -> ValidationResult {
        let mut reasons = Vec::new();

        if date.year() < self.config.min_year {
            reasons.push(RejectionReason::BelowMinimumYear {
                year: date.year(),
                min_year: self.config.min_year,
            });
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            tracing::debug!(%date, min_year = self.config.min_year, "date below plausibility threshold");
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    /// Classify a normalized date as an extraction outcome
    pub fn classify(&self, date: StructuredDate) -> Outcome {
        match self.validate(&date).status {
            ValidationStatus::Accepted => Outcome::Accepted(date),
            ValidationStatus::Rejected => Outcome::Rejected(Rejection::Implausible {
                date,
                min_year: self.config.min_year,
            }),
        }
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_threshold_year() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper.validate(&StructuredDate::Year(1800));
        assert_eq!(result.status, ValidationStatus::Accepted);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_rejects_year_below_threshold() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper.validate(&StructuredDate::Year(1799));
        assert_eq!(result.status, ValidationStatus::Rejected);
        assert_eq!(
            result.reasons,
            vec![RejectionReason::BelowMinimumYear { year: 1799, min_year: 1800 }]
        );
    }

    #[test]
    fn test_full_dates_use_year_only() {
        let gatekeeper = Gatekeeper::default_config();
        let early = StructuredDate::year_month_day(1799, 12, 31).unwrap();
        let late = StructuredDate::year_month_day(1800, 1, 1).unwrap();

        assert_eq!(gatekeeper.validate(&early).status, ValidationStatus::Rejected);
        assert_eq!(gatekeeper.validate(&late).status, ValidationStatus::Accepted);
    }

    #[test]
    fn test_classify() {
        let gatekeeper = Gatekeeper::default_config();

        assert_eq!(
            gatekeeper.classify(StructuredDate::Year(1923)),
            Outcome::Accepted(StructuredDate::Year(1923))
        );
        assert_eq!(
            gatekeeper.classify(StructuredDate::Year(1650)),
            Outcome::Rejected(Rejection::Implausible {
                date: StructuredDate::Year(1650),
                min_year: 1800,
            })
        );
    }

    #[test]
    fn test_custom_threshold() {
        let gatekeeper = Gatekeeper::new(ValidationConfig { min_year: 1900 }).unwrap();
        assert!(!gatekeeper.classify(StructuredDate::Year(1850)).is_accepted());
    }

    #[test]
    fn test_invalid_config_refused() {
        assert!(Gatekeeper::new(ValidationConfig { min_year: 0 }).is_err());
    }
}

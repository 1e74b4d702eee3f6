//! Outcome of running the extraction pipeline for one subject and kind

use crate::StructuredDate;
use std::fmt;

/// Why a matched date was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The date token could not be normalized
    Malformed {
        /// Raw token text
        token: String,
        /// What was wrong with it
        reason: String,
    },

    /// The year is below the plausibility threshold
    Implausible {
        /// The normalized date
        date: StructuredDate,
        /// Minimum accepted year
        min_year: i32,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Malformed { token, reason } => {
                write!(f, "malformed date '{}': {}", token, reason)
            }
            Rejection::Implausible { date, min_year } => {
                write!(f, "implausible date {} (before {})", date, min_year)
            }
        }
    }
}

/// Result of extracting one kind of date from one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A plausible date was found
    Accepted(StructuredDate),

    /// No marker-adjacent date in the text
    NotFound,

    /// A date was found but is not actionable
    Rejected(Rejection),
}

impl Outcome {
    /// The accepted date, if any
    pub fn accepted(&self) -> Option<&StructuredDate> {
        match self {
            Outcome::Accepted(date) => Some(date),
            _ => None,
        }
    }

    /// Whether this outcome carries an accepted date
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted(date) => write!(f, "accepted {}", date),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::Rejected(rejection) => write!(f, "rejected: {}", rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_accessor() {
        let outcome = Outcome::Accepted(StructuredDate::Year(1923));
        assert!(outcome.is_accepted());
        assert_eq!(outcome.accepted(), Some(&StructuredDate::Year(1923)));

        assert!(!Outcome::NotFound.is_accepted());
        assert_eq!(Outcome::NotFound.accepted(), None);
    }

    #[test]
    fn test_display() {
        let rejected = Outcome::Rejected(Rejection::Implausible {
            date: StructuredDate::Year(1650),
            min_year: 1800,
        });
        assert_eq!(rejected.to_string(), "rejected: implausible date 1650 (before 1800)");

        let malformed = Rejection::Malformed {
            token: "12 jan 1923".to_string(),
            reason: "unknown month 'jan'".to_string(),
        };
        assert!(malformed.to_string().contains("12 jan 1923"));
    }
}

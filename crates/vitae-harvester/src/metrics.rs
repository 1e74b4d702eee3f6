//! Metrics collection for harvest runs

use crate::report::{KindAction, SubjectReport, SubjectStatus};
use std::collections::HashMap;
use vitae_domain::{EventKind, Outcome};

/// Counters for one kind of date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    /// Dates that passed extraction and the plausibility filter
    pub accepted: usize,
    /// Claims written
    pub submitted: usize,
    /// Claims already held by the knowledge base
    pub already_present: usize,
    /// Malformed or implausible dates
    pub rejected: usize,
    /// No marker-adjacent date
    pub not_found: usize,
    /// Failed writes
    pub failed: usize,
}

/// Metrics collected during a harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestMetrics {
    /// Counters per kind
    pub kinds: HashMap<EventKind, KindCounts>,

    /// Subjects handled, whatever their status
    pub subjects: usize,

    /// Subjects whose article is not linked to an item
    pub unlinked: usize,

    /// Subjects skipped because the item is not a human
    pub not_human: usize,

    /// Subjects with at least one failure
    pub failed: usize,
}

impl HarvestMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a subject report into the counters
    pub fn record(&mut self, report: &SubjectReport) {
        self.subjects += 1;
        match report.status {
            SubjectStatus::Unlinked => self.unlinked += 1,
            SubjectStatus::NotHuman(_) => self.not_human += 1,
            SubjectStatus::Processed(_) | SubjectStatus::Failed(_) => {}
        }
        if report.has_failure() {
            self.failed += 1;
        }

        for kind in &report.kinds {
            let counts = self.kinds.entry(kind.kind).or_default();
            match kind.outcome {
                Outcome::Accepted(_) => counts.accepted += 1,
                Outcome::NotFound => counts.not_found += 1,
                Outcome::Rejected(_) => counts.rejected += 1,
            }
            match kind.action {
                KindAction::Submitted(_) => counts.submitted += 1,
                KindAction::AlreadyPresent => counts.already_present += 1,
                KindAction::Failed(_) => counts.failed += 1,
                KindAction::WouldSubmit(_) | KindAction::Skipped => {}
            }
        }
    }

    /// Counters for a kind
    pub fn kind(&self, kind: EventKind) -> KindCounts {
        self.kinds.get(&kind).copied().unwrap_or_default()
    }

    /// Claims written across both kinds
    pub fn total_submitted(&self) -> usize {
        self.kinds.values().map(|c| c.submitted).sum()
    }

    /// Accepted dates across both kinds
    pub fn total_accepted(&self) -> usize {
        self.kinds.values().map(|c| c.accepted).sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Harvest Summary".to_string(),
            "===============".to_string(),
            format!("Subjects: {}", self.subjects),
            format!("Unlinked: {}", self.unlinked),
            format!("Not human: {}", self.not_human),
            format!("Failed: {}", self.failed),
        ];

        for kind in EventKind::ALL {
            let c = self.kind(kind);
            lines.push(String::new());
            lines.push(format!("{}:", kind));
            lines.push(format!("  Accepted: {}", c.accepted));
            lines.push(format!("  Submitted: {}", c.submitted));
            lines.push(format!("  Already present: {}", c.already_present));
            lines.push(format!("  Rejected: {}", c.rejected));
            lines.push(format!("  Not found: {}", c.not_found));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::KindReport;
    use vitae_domain::{ItemId, Rejection, StructuredDate};

    fn processed(kinds: Vec<KindReport>) -> SubjectReport {
        SubjectReport {
            title: "T".to_string(),
            status: SubjectStatus::Processed(ItemId::new("Q1").unwrap()),
            kinds,
        }
    }

    #[test]
    fn test_metrics_creation() {
        let metrics = HarvestMetrics::new();
        assert_eq!(metrics.subjects, 0);
        assert_eq!(metrics.total_submitted(), 0);
        assert_eq!(metrics.kind(EventKind::Death), KindCounts::default());
    }

    #[test]
    fn test_record_kinds() {
        let mut metrics = HarvestMetrics::new();
        metrics.record(&processed(vec![
            KindReport {
                kind: EventKind::Birth,
                outcome: Outcome::Accepted(StructuredDate::Year(1923)),
                action: KindAction::AlreadyPresent,
            },
            KindReport {
                kind: EventKind::Death,
                outcome: Outcome::Rejected(Rejection::Implausible {
                    date: StructuredDate::Year(1650),
                    min_year: 1800,
                }),
                action: KindAction::Skipped,
            },
        ]));

        let birth = metrics.kind(EventKind::Birth);
        assert_eq!(birth.accepted, 1);
        assert_eq!(birth.already_present, 1);
        assert_eq!(birth.submitted, 0);
        assert_eq!(metrics.kind(EventKind::Death).rejected, 1);
        assert_eq!(metrics.subjects, 1);
        assert_eq!(metrics.failed, 0);
    }

    #[test]
    fn test_record_skipped_subjects() {
        let mut metrics = HarvestMetrics::new();
        metrics.record(&SubjectReport::skipped("A", SubjectStatus::Unlinked));
        metrics.record(&SubjectReport::skipped(
            "B",
            SubjectStatus::NotHuman(ItemId::new("Q515").unwrap()),
        ));
        metrics.record(&SubjectReport::skipped("C", SubjectStatus::Failed("boom".into())));

        assert_eq!(metrics.subjects, 3);
        assert_eq!(metrics.unlinked, 1);
        assert_eq!(metrics.not_human, 1);
        assert_eq!(metrics.failed, 1);
    }

    #[test]
    fn test_reset() {
        let mut metrics = HarvestMetrics::new();
        metrics.record(&SubjectReport::skipped("A", SubjectStatus::Unlinked));
        metrics.reset();
        assert_eq!(metrics.subjects, 0);
        assert_eq!(metrics.unlinked, 0);
    }

    #[test]
    fn test_summary() {
        let mut metrics = HarvestMetrics::new();
        metrics.record(&SubjectReport::skipped("A", SubjectStatus::Unlinked));

        let summary = metrics.summary();
        assert!(summary.contains("Subjects: 1"));
        assert!(summary.contains("Unlinked: 1"));
        assert!(summary.contains("birth:"));
        assert!(summary.contains("death:"));
    }
}

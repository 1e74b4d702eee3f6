//! Output formatting for the CLI.

use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vitae_domain::{EventKind, Locale, Outcome};
use vitae_extractor::Extraction;
use vitae_harvester::{HarvestMetrics, KindAction, SubjectReport, SubjectStatus};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Progress lines for one harvested subject.
    pub fn subject_report(&self, report: &SubjectReport) -> Vec<String> {
        match &report.status {
            SubjectStatus::Processed(item) => report
                .kinds
                .iter()
                .map(|k| {
                    let prefix = format!("{} ({}) {}", report.title, item, k.kind);
                    match &k.action {
                        KindAction::Submitted(claim) => self.success(&format!("{}: submitted {}", prefix, claim.date)),
                        KindAction::WouldSubmit(claim) => self.info(&format!("{}: DRY RUN would submit {}", prefix, claim.date)),
                        KindAction::AlreadyPresent => self.info(&format!("{}: already present", prefix)),
                        KindAction::Failed(e) => self.error(&format!("{}: {}", prefix, e)),
                        KindAction::Skipped => self.outcome_line(&prefix, &k.outcome),
                    }
                })
                .collect(),
            SubjectStatus::Unlinked | SubjectStatus::NotHuman(_) => {
                vec![self.warning(&format!("{}: {}", report.title, report.status))]
            }
            SubjectStatus::Failed(e) => vec![self.error(&format!("{}: {}", report.title, e))],
        }
    }

    /// Lines describing an offline extraction.
    pub fn extraction(&self, extraction: &Extraction) -> Vec<String> {
        let mut lines = Vec::new();
        for kind in EventKind::ALL {
            let detail = extraction.get(kind);
            lines.push(self.outcome_line(kind.as_str(), &detail.outcome));
            if let Some(section) = &detail.section {
                lines.push(format!("  section: {}", section));
            }
            if let Some(token) = &detail.token {
                lines.push(format!("  token:   {}", token));
            }
        }
        lines
    }

    fn outcome_line(&self, prefix: &str, outcome: &Outcome) -> String {
        let line = format!("{}: {}", prefix, outcome);
        match outcome {
            Outcome::Accepted(_) => self.success(&line),
            Outcome::NotFound => self.colorize(&line, "cyan"),
            Outcome::Rejected(_) => self.warning(&line),
        }
    }

    /// Summary table of a harvest run.
    pub fn summary_table(&self, metrics: &HarvestMetrics) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Kind", "Accepted", "Submitted", "Already present", "Rejected", "Not found", "Failed"]);

        for kind in EventKind::ALL {
            let c = metrics.kind(kind);
            builder.push_record([
                kind.to_string(),
                c.accepted.to_string(),
                c.submitted.to_string(),
                c.already_present.to_string(),
                c.rejected.to_string(),
                c.not_found.to_string(),
                c.failed.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\nSubjects: {}  unlinked: {}  not human: {}  failed: {}",
            table, metrics.subjects, metrics.unlinked, metrics.not_human, metrics.failed
        )
    }

    /// Table of supported locales.
    pub fn locales_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Code", "Name", "Birth", "Death", "Source item"]);

        for locale in Locale::ALL {
            let profile = locale.profile();
            builder.push_record([
                profile.code,
                profile.name,
                profile.birth_marker,
                profile.death_marker,
                profile.wiki_item,
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

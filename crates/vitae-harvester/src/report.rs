//! Per-subject results of a harvest run

use std::fmt;
use vitae_domain::{DateClaim, EventKind, ItemId, Outcome};

/// What happened to one kind of date for a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindAction {
    /// Claim written to the knowledge base
    Submitted(DateClaim),

    /// Dry run: claim that would have been written
    WouldSubmit(DateClaim),

    /// The knowledge base already holds a claim of this kind
    AlreadyPresent,

    /// Nothing to write (not found or rejected)
    Skipped,

    /// Writing the claim failed
    Failed(String),
}

/// Outcome and action for one kind of date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindReport {
    /// Birth or death
    pub kind: EventKind,

    /// Extraction outcome
    pub outcome: Outcome,

    /// Resulting action
    pub action: KindAction,
}

/// How far processing of a subject got
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectStatus {
    /// Both kinds were examined
    Processed(ItemId),

    /// The article is not linked to any item
    Unlinked,

    /// The linked item is not marked as a human
    NotHuman(ItemId),

    /// A collaborator failed before the kinds could be examined
    Failed(String),
}

/// Result of processing one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectReport {
    /// Article title
    pub title: String,

    /// Subject-level status
    pub status: SubjectStatus,

    /// Per-kind results; empty unless the status is `Processed`
    pub kinds: Vec<KindReport>,
}

impl SubjectReport {
    pub(crate) fn skipped(title: &str, status: SubjectStatus) -> Self {
        Self {
            title: title.to_string(),
            status,
            kinds: Vec::new(),
        }
    }

    /// Report for a kind, if it was examined
    pub fn kind(&self, kind: EventKind) -> Option<&KindReport> {
        self.kinds.iter().find(|k| k.kind == kind)
    }

    /// Claims written for this subject
    pub fn submitted(&self) -> impl Iterator<Item = &DateClaim> {
        self.kinds.iter().filter_map(|k| match &k.action {
            KindAction::Submitted(claim) => Some(claim),
            _ => None,
        })
    }

    /// Whether anything went wrong for this subject
    pub fn has_failure(&self) -> bool {
        matches!(self.status, SubjectStatus::Failed(_))
            || self.kinds.iter().any(|k| matches!(k.action, KindAction::Failed(_)))
    }
}

impl fmt::Display for KindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindAction::Submitted(claim) => write!(f, "submitted {}", claim),
            KindAction::WouldSubmit(claim) => write!(f, "DRY RUN would submit {}", claim),
            KindAction::AlreadyPresent => write!(f, "already present"),
            KindAction::Skipped => write!(f, "nothing to submit"),
            KindAction::Failed(e) => write!(f, "error: {}", e),
        }
    }
}

impl fmt::Display for SubjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectStatus::Processed(item) => write!(f, "{}", item),
            SubjectStatus::Unlinked => write!(f, "not linked to an item"),
            SubjectStatus::NotHuman(item) => write!(f, "{} not marked as human", item),
            SubjectStatus::Failed(e) => write!(f, "error: {}", e),
        }
    }
}

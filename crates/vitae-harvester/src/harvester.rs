//! Core Harvester implementation

use crate::report::{KindAction, KindReport, SubjectReport, SubjectStatus};
use crate::{HarvestConfig, HarvestError, HarvestMetrics, Throttle};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use vitae_domain::traits::{ArticleSource, KnowledgeBase};
use vitae_domain::{DateClaim, EventKind, Outcome, Provenance, SubjectRecord};
use vitae_extractor::{Extraction, Extractor};

/// Cloneable flag asking a running harvest to stop between subjects
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request a stop; the current subject still finishes
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether a stop was requested
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The Harvester drives extraction and claim submission for a list of subjects
///
/// Subjects are processed strictly one after another, birth before death.
/// A failure for one subject is reported and the run moves on.
pub struct Harvester<A, K> {
    extractor: Extractor,
    articles: A,
    knowledge_base: K,
    provenance: Provenance,
    config: HarvestConfig,
    throttle: Throttle,
    metrics: HarvestMetrics,
    stop: StopHandle,
}

impl<A, K> Harvester<A, K>
where
    A: ArticleSource,
    A::Error: Display,
    K: KnowledgeBase,
    K::Error: Display,
{
    /// Create a new Harvester
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the delay bounds are inverted.
    pub fn new(
        extractor: Extractor,
        articles: A,
        knowledge_base: K,
        config: HarvestConfig,
    ) -> Result<Self, HarvestError> {
        config.validate()?;
        Ok(Self {
            provenance: Provenance::imported_from(extractor.locale()),
            throttle: Throttle::from_config(&config),
            extractor,
            articles,
            knowledge_base,
            config,
            metrics: HarvestMetrics::new(),
            stop: StopHandle::default(),
        })
    }

    /// Handle that stops the run before the next subject
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Metrics gathered so far
    pub fn metrics(&self) -> &HarvestMetrics {
        &self.metrics
    }

    /// Reset the metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Knowledge base in use
    pub fn knowledge_base(&self) -> &K {
        &self.knowledge_base
    }

    /// Process every title in order, calling `observer` after each subject
    ///
    /// Stops early, between subjects, once the stop handle fires.
    pub async fn run<I, S, F>(&mut self, titles: I, mut observer: F) -> &HarvestMetrics
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&SubjectReport),
    {
        info!(
            locale = %self.extractor.locale(),
            dry_run = self.config.dry_run,
            "harvest started"
        );

        for title in titles {
            if self.stop.is_stopped() {
                info!("stop requested, not starting further subjects");
                break;
            }
            let report = self.process(title.as_ref()).await;
            observer(&report);
        }

        info!(
            subjects = self.metrics.subjects,
            submitted = self.metrics.total_submitted(),
            failed = self.metrics.failed,
            "harvest finished"
        );
        &self.metrics
    }

    /// Process a single subject and record it in the metrics
    pub async fn process(&mut self, title: &str) -> SubjectReport {
        let report = self.process_subject(title).await;
        self.metrics.record(&report);
        report
    }

    async fn process_subject(&mut self, title: &str) -> SubjectReport {
        debug!(title, "processing subject");

        let text = match self.articles.fetch_text(title).await {
            Ok(text) => text,
            Err(e) => return self.failed(title, HarvestError::Article(e.to_string())),
        };
        let extraction = self.extractor.extract_all(&text);

        let record = match self.knowledge_base.lookup(title).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                info!(title, "article is not linked to an item");
                return SubjectReport::skipped(title, SubjectStatus::Unlinked);
            }
            Err(e) => return self.failed(title, HarvestError::KnowledgeBase(e.to_string())),
        };

        if !record.is_human {
            info!(title, item = %record.item, "item is not marked as human");
            return SubjectReport::skipped(title, SubjectStatus::NotHuman(record.item));
        }

        let mut kinds = Vec::with_capacity(EventKind::ALL.len());
        for kind in EventKind::ALL {
            kinds.push(self.process_kind(title, &record, &extraction, kind).await);
        }

        SubjectReport {
            title: title.to_string(),
            status: SubjectStatus::Processed(record.item),
            kinds,
        }
    }

    async fn process_kind(
        &mut self,
        title: &str,
        record: &SubjectRecord,
        extraction: &Extraction,
        kind: EventKind,
    ) -> KindReport {
        let outcome = extraction.outcome(kind).clone();

        let action = if record.has_claim(kind) {
            debug!(title, %kind, "claim already present");
            KindAction::AlreadyPresent
        } else if let Outcome::Accepted(date) = outcome {
            let claim = DateClaim::new(title, record.item.clone(), kind, date, self.extractor.locale());
            self.submit(claim).await
        } else {
            debug!(title, %kind, %outcome, "nothing to submit");
            KindAction::Skipped
        };

        KindReport { kind, outcome, action }
    }

    async fn submit(&mut self, claim: DateClaim) -> KindAction {
        if self.config.dry_run {
            info!(claim = %claim, "DRY RUN: claim not written");
            return KindAction::WouldSubmit(claim);
        }

        match self.knowledge_base.submit(&claim, &self.provenance).await {
            Ok(()) => {
                info!(claim = %claim, "claim submitted");
                self.throttle.pause().await;
                KindAction::Submitted(claim)
            }
            Err(e) => {
                let error = HarvestError::KnowledgeBase(e.to_string());
                warn!(claim = %claim, %error, "claim submission failed");
                KindAction::Failed(error.to_string())
            }
        }
    }

    fn failed(&self, title: &str, error: HarvestError) -> SubjectReport {
        warn!(title, %error, "subject skipped");
        SubjectReport::skipped(title, SubjectStatus::Failed(error.to_string()))
    }
}

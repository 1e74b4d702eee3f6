//! In-memory collaborators for deterministic testing
//!
//! Both types are cheap to clone; clones share state, so a test can keep a
//! handle while the harvester owns another.

use crate::error::WikiError;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use vitae_domain::traits::{ArticleSource, KnowledgeBase};
use vitae_domain::{DateClaim, EventKind, ItemId, Provenance, SubjectRecord};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn simulated(title: &str) -> WikiError {
    WikiError::Api {
        code: "simulated".to_string(),
        info: format!("simulated failure for '{}'", title),
    }
}

/// Article source backed by a map of title to text
///
/// # Examples
///
/// ```
/// use vitae_wiki::MemoryArticles;
/// use vitae_domain::traits::ArticleSource;
///
/// let articles = MemoryArticles::new().with_article("Greta Garbo", "född 18 september 1905");
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let text = rt.block_on(articles.fetch_text("Greta Garbo")).unwrap();
/// assert_eq!(text, "född 18 september 1905");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryArticles {
    articles: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    fetches: Arc<Mutex<usize>>,
}

impl MemoryArticles {
    /// Create an empty article source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article
    pub fn with_article(self, title: impl Into<String>, text: impl Into<String>) -> Self {
        lock(&self.articles).insert(title.into(), text.into());
        self
    }

    /// Make fetching `title` fail
    pub fn fail_on(self, title: impl Into<String>) -> Self {
        lock(&self.failing).insert(title.into());
        self
    }

    /// Number of fetch calls so far
    pub fn fetch_count(&self) -> usize {
        *lock(&self.fetches)
    }
}

impl ArticleSource for MemoryArticles {
    type Error = WikiError;

    async fn fetch_text(&self, title: &str) -> Result<String, WikiError> {
        *lock(&self.fetches) += 1;
        if lock(&self.failing).contains(title) {
            return Err(simulated(title));
        }
        lock(&self.articles)
            .get(title)
            .cloned()
            .ok_or_else(|| WikiError::MissingPage(title.to_string()))
    }
}

/// Knowledge base backed by a map of title to subject record
///
/// Accepted submissions are recorded and added to the subject's existing
/// claims, so a repeated run sees them as already present.
#[derive(Debug, Clone, Default)]
pub struct MemoryKnowledgeBase {
    subjects: Arc<Mutex<HashMap<String, SubjectRecord>>>,
    submissions: Arc<Mutex<Vec<DateClaim>>>,
    failing_lookups: Arc<Mutex<HashSet<String>>>,
    failing_submits: Arc<Mutex<HashSet<String>>>,
}

impl MemoryKnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// Link a title to a human item
    pub fn with_human(self, title: impl Into<String>, item: &str) -> Self {
        self.with_subject(title, item, true)
    }

    /// Link a title to an item
    ///
    /// # Panics
    ///
    /// Panics if `item` is not a valid item identifier.
    pub fn with_subject(self, title: impl Into<String>, item: &str, is_human: bool) -> Self {
        let item = match ItemId::new(item) {
            Ok(item) => item,
            Err(e) => panic!("invalid test item: {}", e),
        };
        lock(&self.subjects).insert(
            title.into(),
            SubjectRecord {
                item,
                is_human,
                existing: Vec::new(),
            },
        );
        self
    }

    /// Mark a claim kind as already present for a title
    pub fn with_existing(self, title: &str, kind: EventKind) -> Self {
        if let Some(record) = lock(&self.subjects).get_mut(title) {
            if !record.existing.contains(&kind) {
                record.existing.push(kind);
            }
        }
        self
    }

    /// Make lookups of `title` fail
    pub fn fail_lookup_on(self, title: impl Into<String>) -> Self {
        lock(&self.failing_lookups).insert(title.into());
        self
    }

    /// Make submissions for `title` fail
    pub fn fail_submit_on(self, title: impl Into<String>) -> Self {
        lock(&self.failing_submits).insert(title.into());
        self
    }

    /// Claims accepted so far, in submission order
    pub fn submissions(&self) -> Vec<DateClaim> {
        lock(&self.submissions).clone()
    }
}

impl KnowledgeBase for MemoryKnowledgeBase {
    type Error = WikiError;

    async fn lookup(&self, title: &str) -> Result<Option<SubjectRecord>, WikiError> {
        if lock(&self.failing_lookups).contains(title) {
            return Err(simulated(title));
        }
        Ok(lock(&self.subjects).get(title).cloned())
    }

    async fn submit(&mut self, claim: &DateClaim, _provenance: &Provenance) -> Result<(), WikiError> {
        if lock(&self.failing_submits).contains(&claim.title) {
            return Err(simulated(&claim.title));
        }
        if let Some(record) = lock(&self.subjects).get_mut(&claim.title) {
            if !record.existing.contains(&claim.kind) {
                record.existing.push(claim.kind);
            }
        }
        lock(&self.submissions).push(claim.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_domain::{Locale, StructuredDate};

    #[tokio::test]
    async fn test_articles() {
        let articles = MemoryArticles::new()
            .with_article("A", "text")
            .fail_on("B");

        assert_eq!(articles.fetch_text("A").await.unwrap(), "text");
        assert!(matches!(articles.fetch_text("B").await, Err(WikiError::Api { .. })));
        assert!(matches!(articles.fetch_text("C").await, Err(WikiError::MissingPage(_))));
        assert_eq!(articles.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_submission_marks_claim_existing() {
        let kb = MemoryKnowledgeBase::new().with_human("Greta Garbo", "Q5443");
        let mut writer = kb.clone();

        let claim = DateClaim::new(
            "Greta Garbo",
            ItemId::new("Q5443").unwrap(),
            EventKind::Birth,
            StructuredDate::Year(1905),
            Locale::Swedish,
        );
        writer
            .submit(&claim, &Provenance::imported_from(Locale::Swedish))
            .await
            .unwrap();

        let record = kb.lookup("Greta Garbo").await.unwrap().unwrap();
        assert!(record.has_claim(EventKind::Birth));
        assert_eq!(kb.submissions(), vec![claim]);
    }

    #[tokio::test]
    async fn test_unlinked_and_failing_lookup() {
        let kb = MemoryKnowledgeBase::new().fail_lookup_on("Broken");
        assert_eq!(kb.lookup("Nobody").await.unwrap(), None);
        assert!(kb.lookup("Broken").await.is_err());
    }
}

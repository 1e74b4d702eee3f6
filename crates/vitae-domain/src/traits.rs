//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction pipeline and the
//! services it talks to. Implementations live in `vitae-wiki`.

use crate::{DateClaim, Provenance, SubjectRecord};

/// Source of article prose
///
/// Implemented by the infrastructure layer (vitae-wiki)
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    /// Error type for fetch operations
    type Error;

    /// Current plain-text content of the article, markup stripped
    async fn fetch_text(&self, title: &str) -> Result<String, Self::Error>;
}

/// Linked-data knowledge base receiving date claims
///
/// Implemented by the infrastructure layer (vitae-wiki)
#[allow(async_fn_in_trait)]
pub trait KnowledgeBase {
    /// Error type for knowledge-base operations
    type Error;

    /// Look up the item linked to an article title
    ///
    /// Returns `None` when the article is not linked to any item.
    async fn lookup(&self, title: &str) -> Result<Option<SubjectRecord>, Self::Error>;

    /// Persist a claim with its reference
    async fn submit(
        &mut self,
        claim: &DateClaim,
        provenance: &Provenance,
    ) -> Result<(), Self::Error>;
}

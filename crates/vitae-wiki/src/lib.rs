//! Vitae Wiki Clients
//!
//! Implementations of the `ArticleSource` and `KnowledgeBase` traits from
//! `vitae-domain`.
//!
//! # Clients
//!
//! - `MediaWikiClient`: plain-text article extracts from an encyclopedia edition
//! - `WikibaseClient`: item lookup and claim writes with bot-password login
//! - `MemoryArticles` / `MemoryKnowledgeBase`: deterministic in-memory doubles
//!
//! Read requests retry transient failures with exponential backoff. Writes
//! are sent exactly once.

#![warn(missing_docs)]

pub mod article;
pub mod config;
pub mod error;
mod http;
pub mod mock;
pub mod payload;
pub mod wikibase;

pub use article::MediaWikiClient;
pub use config::WikiConfig;
pub use error::WikiError;
pub use mock::{MemoryArticles, MemoryKnowledgeBase};
pub use wikibase::WikibaseClient;

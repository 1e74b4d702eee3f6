//! Vitae Harvester
//!
//! Drives a batch of subjects through extraction and claim submission.
//!
//! # Overview
//!
//! For each article title the Harvester:
//! - fetches the article prose from an [`ArticleSource`](vitae_domain::traits::ArticleSource)
//! - extracts birth and death outcomes with the [`Extractor`](vitae_extractor::Extractor)
//! - resolves the linked item through a [`KnowledgeBase`](vitae_domain::traits::KnowledgeBase)
//! - skips unlinked subjects and items not marked as human
//! - submits each accepted date unless a claim of that kind already exists
//! - pauses a random delay after every write
//!
//! # Usage
//!
//! ```no_run
//! use vitae_extractor::Extractor;
//! use vitae_harvester::{HarvestConfig, Harvester};
//! use vitae_wiki::{MediaWikiClient, WikiConfig, WikibaseClient};
//! use vitae_domain::Locale;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let wiki = WikiConfig::default();
//!     let articles = MediaWikiClient::new(Locale::Swedish, &wiki)?;
//!     let kb = WikibaseClient::new(Locale::Swedish, &wiki)?.with_credentials("Bot@vitae", "secret");
//!
//!     let mut harvester = Harvester::new(
//!         Extractor::new(Locale::Swedish, Default::default())?,
//!         articles,
//!         kb,
//!         HarvestConfig::default(),
//!     )?;
//!
//!     let metrics = harvester.run(["Greta Garbo"], |report| println!("{:?}", report)).await;
//!     println!("{}", metrics.summary());
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [harvest]
//! min_delay_secs = 13
//! max_delay_secs = 65
//! dry_run = false
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod harvester;
mod metrics;
mod report;
mod throttle;

pub use config::HarvestConfig;
pub use error::HarvestError;
pub use harvester::{Harvester, StopHandle};
pub use metrics::{HarvestMetrics, KindCounts};
pub use report::{KindAction, KindReport, SubjectReport, SubjectStatus};
pub use throttle::Throttle;

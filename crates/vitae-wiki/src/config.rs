//! Configuration for the wiki clients

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vitae_domain::Locale;

/// Default Wikibase API endpoint
pub const DEFAULT_WIKIDATA_API: &str = "https://www.wikidata.org/w/api.php";

/// Default article API template; `{lang}` is replaced by the locale code
pub const DEFAULT_ARTICLE_API: &str = "https://{lang}.wikipedia.org/w/api.php";

/// Connection settings shared by the article and knowledge-base clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiConfig {
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Wikibase API endpoint
    #[serde(default = "default_wikidata_api")]
    pub wikidata_api: String,

    /// Article API endpoint template
    #[serde(default = "default_article_api")]
    pub article_api: String,

    /// Bot-password user name (`User@BotName`); required for writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry attempts for read requests; writes are never retried
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl WikiConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Article API endpoint for a locale
    pub fn article_api_for(&self, locale: Locale) -> String {
        self.article_api.replace("{lang}", locale.code())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if !self.article_api.contains("{lang}") {
            return Err("article_api must contain the {lang} placeholder".to_string());
        }
        Ok(())
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            wikidata_api: default_wikidata_api(),
            article_api: default_article_api(),
            username: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_user_agent() -> String {
    format!("vitae/{} (birth and death date harvesting bot)", env!("CARGO_PKG_VERSION"))
}

fn default_wikidata_api() -> String {
    DEFAULT_WIKIDATA_API.to_string()
}

fn default_article_api() -> String {
    DEFAULT_ARTICLE_API.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

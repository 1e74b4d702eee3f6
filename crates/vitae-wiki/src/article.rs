//! Article text from a MediaWiki encyclopedia edition
//!
//! Uses the `extracts` query module with `explaintext`, so the returned text
//! is already free of wiki markup. Redirects are followed.

use crate::error::WikiError;
use crate::http::{build_client, get_json};
use crate::WikiConfig;
use serde_json::Value;
use tracing::debug;
use vitae_domain::traits::ArticleSource;
use vitae_domain::Locale;

/// Article client for one encyclopedia edition
pub struct MediaWikiClient {
    locale: Locale,
    endpoint: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl MediaWikiClient {
    /// Create a client for the edition of `locale`
    pub fn new(locale: Locale, config: &WikiConfig) -> Result<Self, WikiError> {
        Ok(Self {
            locale,
            endpoint: config.article_api_for(locale),
            client: build_client(config, false)?,
            max_retries: config.max_retries,
        })
    }

    /// Edition this client reads from
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// API endpoint in use
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ArticleSource for MediaWikiClient {
    type Error = WikiError;

    async fn fetch_text(&self, title: &str) -> Result<String, WikiError> {
        let query = [
            ("action", "query"),
            ("prop", "extracts"),
            ("explaintext", "1"),
            ("redirects", "1"),
            ("titles", title),
            ("format", "json"),
            ("formatversion", "2"),
        ];
        let body = get_json(&self.client, &self.endpoint, &query, self.max_retries).await?;
        let text = parse_extract(&body, title)?;
        debug!(title, chars = text.chars().count(), "article fetched");
        Ok(text)
    }
}

/// Pull the plain-text extract out of a `formatversion=2` query response
pub(crate) fn parse_extract(body: &Value, title: &str) -> Result<String, WikiError> {
    let page = body
        .pointer("/query/pages/0")
        .ok_or_else(|| WikiError::InvalidResponse(format!("no page entry for '{}'", title)))?;

    if page.get("missing").is_some() || page.get("invalid").is_some() {
        return Err(WikiError::MissingPage(title.to_string()));
    }

    page.get("extract")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| WikiError::InvalidResponse(format!("page '{}' has no extract", title)))
}

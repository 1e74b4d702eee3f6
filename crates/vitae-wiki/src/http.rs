//! Shared HTTP plumbing for the API clients

use crate::error::{check_api_error, WikiError};
use crate::WikiConfig;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

/// Build a client with the configured timeout and User-Agent
pub(crate) fn build_client(config: &WikiConfig, cookies: bool) -> Result<reqwest::Client, WikiError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .cookie_store(cookies)
        .build()?;
    Ok(client)
}

/// GET an API URL and decode its JSON body, retrying transient failures
///
/// Backoff doubles from one second: 1s, 2s, 4s.
pub(crate) async fn get_json(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
    max_retries: u32,
) -> Result<Value, WikiError> {
    let attempts = max_retries.max(1);
    let mut attempt = 0;

    loop {
        match fetch_once(client, url, query).await {
            Ok(body) => return Ok(body),
            Err(e) if e.is_transient() && attempt + 1 < attempts => {
                attempt += 1;
                let delay = Duration::from_secs(2u64.pow(attempt - 1));
                warn!(url, attempt, error = %e, "transient API failure, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn fetch_once(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Value, WikiError> {
    let body: Value = client
        .get(url)
        .query(query)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    check_api_error(&body)?;
    Ok(body)
}

/// POST a form to an API URL once and decode its JSON body
pub(crate) async fn post_form(
    client: &reqwest::Client,
    url: &str,
    form: &[(&str, &str)],
) -> Result<Value, WikiError> {
    let body: Value = client
        .post(url)
        .form(form)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    check_api_error(&body)?;
    Ok(body)
}

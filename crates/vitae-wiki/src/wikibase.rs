//! Wikibase knowledge-base client
//!
//! Reads go through `wbgetentities` without authentication. The first write
//! triggers a bot-password login; the resulting CSRF token is cached until
//! the API rejects it.

use crate::error::WikiError;
use crate::http::{build_client, get_json, post_form};
use crate::payload::{new_guid, statement};
use crate::WikiConfig;
use serde_json::Value;
use tracing::{debug, info};
use vitae_domain::traits::KnowledgeBase;
use vitae_domain::{DateClaim, EventKind, ItemId, Locale, Provenance, SubjectRecord};

/// Item marking a human individual
pub const HUMAN: &str = "Q5";

/// Property "instance of"
pub const INSTANCE_OF: &str = "P31";

/// Knowledge-base client resolving articles of one edition
pub struct WikibaseClient {
    locale: Locale,
    endpoint: String,
    client: reqwest::Client,
    max_retries: u32,
    credentials: Option<(String, String)>,
    csrf_token: Option<String>,
}

impl WikibaseClient {
    /// Create a client resolving titles of the `locale` edition
    pub fn new(locale: Locale, config: &WikiConfig) -> Result<Self, WikiError> {
        Ok(Self {
            locale,
            endpoint: config.wikidata_api.clone(),
            client: build_client(config, true)?,
            max_retries: config.max_retries,
            credentials: None,
            csrf_token: None,
        })
    }

    /// Set bot-password credentials used for writes
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Whether credentials are configured
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Log in and fetch an edit token, unless one is already cached
    pub async fn login(&mut self) -> Result<(), WikiError> {
        if self.csrf_token.is_some() {
            return Ok(());
        }
        let (username, password) = self
            .credentials
            .clone()
            .ok_or_else(|| WikiError::Auth("no bot credentials configured".to_string()))?;

        let body = get_json(
            &self.client,
            &self.endpoint,
            &[("action", "query"), ("meta", "tokens"), ("type", "login"), ("format", "json")],
            self.max_retries,
        )
        .await?;
        let login_token = token(&body, "logintoken")?;

        let body = post_form(
            &self.client,
            &self.endpoint,
            &[
                ("action", "login"),
                ("lgname", username.as_str()),
                ("lgpassword", password.as_str()),
                ("lgtoken", login_token.as_str()),
                ("format", "json"),
            ],
        )
        .await?;
        check_login(&body)?;

        let body = get_json(
            &self.client,
            &self.endpoint,
            &[("action", "query"), ("meta", "tokens"), ("format", "json")],
            self.max_retries,
        )
        .await?;
        self.csrf_token = Some(token(&body, "csrftoken")?);

        info!(user = %username, "logged in to knowledge base");
        Ok(())
    }
}

impl KnowledgeBase for WikibaseClient {
    type Error = WikiError;

    async fn lookup(&self, title: &str) -> Result<Option<SubjectRecord>, WikiError> {
        let site = self.locale.wiki_site();
        let query = [
            ("action", "wbgetentities"),
            ("sites", site.as_str()),
            ("titles", title),
            ("props", "claims"),
            ("format", "json"),
        ];
        let body = get_json(&self.client, &self.endpoint, &query, self.max_retries).await?;
        let record = parse_subject(&body)?;
        debug!(title, item = ?record.as_ref().map(|r| r.item.to_string()), "subject resolved");
        Ok(record)
    }

    async fn submit(&mut self, claim: &DateClaim, provenance: &Provenance) -> Result<(), WikiError> {
        self.login().await?;
        let token = self
            .csrf_token
            .clone()
            .ok_or_else(|| WikiError::Auth("no edit token".to_string()))?;

        let guid = new_guid(claim);
        let payload = serde_json::to_string(&statement(claim, provenance, &guid))?;
        let summary = format!("Imported {} date from {}: {}", claim.kind, claim.locale.wiki_site(), claim.title);

        let result = post_form(
            &self.client,
            &self.endpoint,
            &[
                ("action", "wbsetclaim"),
                ("claim", payload.as_str()),
                ("token", token.as_str()),
                ("bot", "1"),
                ("summary", summary.as_str()),
                ("format", "json"),
            ],
        )
        .await;

        if let Err(WikiError::Api { code, .. }) = &result {
            if code == "badtoken" {
                self.csrf_token = None;
            }
        }
        result?;

        info!(claim = %claim, %guid, "claim written");
        Ok(())
    }
}

fn token(body: &Value, name: &str) -> Result<String, WikiError> {
    body.pointer(&format!("/query/tokens/{}", name))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| WikiError::Auth(format!("response carried no {}", name)))
}

fn check_login(body: &Value) -> Result<(), WikiError> {
    let result = body.pointer("/login/result").and_then(Value::as_str);
    match result {
        Some("Success") => Ok(()),
        Some(other) => {
            let reason = body
                .pointer("/login/reason")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Err(WikiError::Auth(format!("login {}: {}", other, reason)))
        }
        None => Err(WikiError::InvalidResponse("login response has no result".to_string())),
    }
}

/// Interpret a `wbgetentities` response for a single title
pub(crate) fn parse_subject(body: &Value) -> Result<Option<SubjectRecord>, WikiError> {
    let entities = body
        .get("entities")
        .and_then(Value::as_object)
        .ok_or_else(|| WikiError::InvalidResponse("no entities in response".to_string()))?;

    let Some((key, entity)) = entities.iter().next() else {
        return Ok(None);
    };
    if key == "-1" || entity.get("missing").is_some() {
        return Ok(None);
    }

    let item = ItemId::new(key.as_str())?;
    let claims = entity.get("claims");
    let property = |id: &str| claims.and_then(|c| c.get(id)).and_then(Value::as_array);

    let is_human = property(INSTANCE_OF).is_some_and(|statements| {
        statements.iter().any(|s| {
            s.pointer("/mainsnak/datavalue/value/id").and_then(Value::as_str) == Some(HUMAN)
        })
    });

    let existing = EventKind::ALL
        .into_iter()
        .filter(|kind| property(kind.property()).is_some_and(|s| !s.is_empty()))
        .collect();

    Ok(Some(SubjectRecord { item, is_human, existing }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instance_of(id: &str) -> Value {
        json!({"mainsnak": {"snaktype": "value", "property": "P31",
            "datavalue": {"type": "wikibase-entityid", "value": {"entity-type": "item", "id": id}}}})
    }

    #[test]
    fn test_parse_human_without_dates() {
        let body = json!({"entities": {"Q5443": {
            "id": "Q5443",
            "claims": {"P31": [instance_of("Q5")]}
        }}, "success": 1});

        let record = parse_subject(&body).unwrap().unwrap();
        assert_eq!(record.item.as_str(), "Q5443");
        assert!(record.is_human);
        assert!(record.existing.is_empty());
    }

    #[test]
    fn test_parse_existing_birth_claim() {
        let body = json!({"entities": {"Q5443": {
            "claims": {"P31": [instance_of("Q5")], "P569": [{"mainsnak": {}}]}
        }}});
        let record = parse_subject(&body).unwrap().unwrap();
        assert!(record.has_claim(EventKind::Birth));
        assert!(!record.has_claim(EventKind::Death));
    }

    #[test]
    fn test_parse_non_human() {
        let body = json!({"entities": {"Q1754": {
            "claims": {"P31": [instance_of("Q515")]}
        }}});
        assert!(!parse_subject(&body).unwrap().unwrap().is_human);
    }

    #[test]
    fn test_parse_unlinked_title() {
        let body = json!({"entities": {"-1": {"site": "svwiki", "title": "Ingen Alls", "missing": ""}}});
        assert_eq!(parse_subject(&body).unwrap(), None);
    }

    #[test]
    fn test_parse_invalid_shape() {
        assert!(matches!(parse_subject(&json!({})), Err(WikiError::InvalidResponse(_))));
    }

    #[test]
    fn test_login_result() {
        assert!(check_login(&json!({"login": {"result": "Success"}})).is_ok());
        assert!(matches!(
            check_login(&json!({"login": {"result": "Failed", "reason": "Incorrect password"}})),
            Err(WikiError::Auth(msg)) if msg.contains("Incorrect password")
        ));
    }

    #[test]
    fn test_token_extraction() {
        let body = json!({"query": {"tokens": {"csrftoken": "abc+\\"}}});
        assert_eq!(token(&body, "csrftoken").unwrap(), "abc+\\");
        assert!(token(&body, "logintoken").is_err());
    }

    #[tokio::test]
    async fn test_login_without_credentials() {
        let mut client = WikibaseClient::new(Locale::Swedish, &WikiConfig::default()).unwrap();
        assert!(!client.has_credentials());
        assert!(matches!(client.login().await, Err(WikiError::Auth(_))));
    }
}

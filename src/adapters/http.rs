use crate::config::toml_config::{AuthConfig, SourceConfig};
use crate::core::{DateRange, RecordKind, SchoolSource};
use crate::domain::candidates;
use crate::domain::services::resolve::resolve_text;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::validate_required_field;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// School API client: bearer-token auth plus one GET per record kind.
#[derive(Debug, Clone)]
pub struct DiaryApiClient {
    client: Client,
    source: SourceConfig,
    auth: AuthConfig,
}

impl DiaryApiClient {
    pub fn new(source: &SourceConfig, auth: &AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(source.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            source: source.clone(),
            auth: auth.clone(),
        })
    }

    pub fn endpoint(&self, kind: RecordKind) -> String {
        format!(
            "{}/{}",
            self.source.base_url.trim_end_matches('/'),
            self.source.path_for(kind).trim_start_matches('/')
        )
    }
}

impl SchoolSource for DiaryApiClient {
    async fn access_token(&self) -> Result<String> {
        if let Some(token) = &self.auth.token {
            return Ok(token.clone());
        }

        let token_url = validate_required_field("auth.token_url", &self.auth.token_url)?;
        let login = validate_required_field("auth.login", &self.auth.login)?;
        let password = validate_required_field("auth.password", &self.auth.password)?;

        tracing::debug!("🔑 Requesting access token from: {}", token_url);
        let response = self
            .client
            .post(token_url)
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EtlError::AuthError {
                message: format!("token endpoint responded with status {}", response.status()),
            });
        }

        let body: Value = response.json().await?;
        body.as_object()
            .and_then(|obj| resolve_text(obj, candidates::auth::ACCESS_TOKEN))
            .ok_or_else(|| EtlError::AuthError {
                message: "token response carried no access token".to_string(),
            })
    }

    async fn fetch(&self, token: &str, kind: RecordKind, range: &DateRange) -> Result<Value> {
        let url = self.endpoint(kind);
        tracing::debug!("📡 {}: Making API request to: {}", kind, url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("from", range.from_param()), ("to", range.to_param())])
            .send()
            .await?;

        tracing::debug!("📡 {}: API response status: {}", kind, response.status());

        if !response.status().is_success() {
            return Err(EtlError::ApiStatusError {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

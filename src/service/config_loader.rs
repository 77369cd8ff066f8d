//! Remote guild config loading.
//!
//! A load is three sequential steps with no retry: fetch the document over HTTP, parse
//! it as YAML into a JSON document, and build and validate a [`GuildConfig`] from it.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::{sync::Arc, time::Duration};

use crate::{error::GuildError, model::guild_config::GuildConfig};

/// Upper bound on a single config fetch, connection included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the raw text of a config document.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, GuildError>;
}

/// Fetches config documents with a plain HTTP GET.
pub struct HttpConfigSource {
    client: reqwest::Client,
}

impl HttpConfigSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    /// Issues a GET with a `_t=<unix timestamp>` cache-busting parameter.
    ///
    /// # Returns
    /// - `Ok(String)` - Response body of a successful response
    /// - `Err(GuildError::Fetch)` - Connection error, timeout or non-success status
    async fn fetch(&self, url: &str) -> Result<String, GuildError> {
        let response = self
            .client
            .get(url)
            .query(&[("_t", Utc::now().timestamp())])
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuildError::Fetch(format!("{} responded with {}", url, status)));
        }

        Ok(response.text().await?)
    }
}

/// Loads and validates guild configs from a [`ConfigSource`].
#[derive(Clone)]
pub struct ConfigLoader {
    source: Arc<dyn ConfigSource>,
}

impl ConfigLoader {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    /// Fetches, parses and validates the config at `url`.
    ///
    /// # Returns
    /// - `Ok((GuildConfig, Value))` - Validated config and the raw document it was built from
    /// - `Err(GuildError::Fetch)` - Request failed, timed out or returned a non-success status
    /// - `Err(GuildError::Parse)` - Body is not YAML or not a mapping
    /// - `Err(GuildError::Validation)` - Document violates the config schema
    pub async fn load(&self, url: &str) -> Result<(GuildConfig, Value), GuildError> {
        let body = self.source.fetch(url).await?;

        let raw = parse_document(&body)?;

        let config = GuildConfig::from_document(&raw)?;
        config.validate()?;

        tracing::debug!("Loaded guild config from {}", url);

        Ok((config, raw))
    }
}

/// Parses YAML text into a JSON document whose top level is a mapping.
///
/// Integer mapping keys (user and role ids) become string keys.
pub fn parse_document(body: &str) -> Result<Value, GuildError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(body).map_err(|e| GuildError::Parse(e.to_string()))?;

    if !yaml.is_mapping() {
        return Err(GuildError::Parse(
            "top level of the document must be a mapping".to_string(),
        ));
    }

    serde_json::to_value(yaml).map_err(|e| GuildError::Parse(e.to_string()))
}

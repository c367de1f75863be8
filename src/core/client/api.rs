//! OpenAI-compatible client used for every supported provider.

use std::time::Duration;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use backoff::ExponentialBackoffBuilder;

use crate::core::config::{Provider, ProviderConfig};

use super::ClientError;
use super::cache::ClientFactory;

/// A live client for one provider account.
///
/// Chat goes through async-openai; endpoints it does not cover (image generation)
/// reuse the same endpoint and credential over the shared `reqwest` client.
pub struct ApiClient {
    provider: Provider,
    base_url: String,
    api_key: String,
    openai: Client<OpenAIConfig>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Endpoint the client talks to, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn openai(&self) -> &Client<OpenAIConfig> {
        &self.openai
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Join an API path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builds [`ApiClient`]s. Gemini is reached through its OpenAI-compatible endpoint,
/// so it needs an explicit base URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenAiCompatFactory;

impl ClientFactory for OpenAiCompatFactory {
    type Client = ApiClient;

    fn build(&self, config: &ProviderConfig, key: &str) -> Result<ApiClient, ClientError> {
        let base_url = config
            .base_url
            .as_deref()
            .or(config.provider.default_base_url())
            .ok_or_else(|| ClientError::MissingBaseUrl(config.name.clone()))?
            .trim_end_matches('/')
            .to_string();

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Init {
                name: config.name.clone(),
                reason: e.to_string(),
            })?;

        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url.clone())
            .with_api_key(key);

        // Rate limits and server errors surface on the first failure.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Ok(ApiClient {
            provider: config.provider,
            base_url,
            api_key: key.to_string(),
            openai: Client::with_config(openai_config).with_backoff(no_retry),
            http,
        })
    }
}

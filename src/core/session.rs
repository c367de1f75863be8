//! One interactive sequence: cached provider clients plus chat history.

use std::sync::Arc;

use serde_json::Value;

use crate::core::client::{ApiClient, ClientCache, ClientError, OpenAiCompatFactory};
use crate::core::config::{Provider, ProviderConfig};
use crate::core::llm::{self, InputError, LlmError};
use crate::core::message;
use crate::core::models::Model;

/// Assistant message every conversation starts with.
pub const GREETING: &str = "How can I help you?";

pub struct Session {
    cache: ClientCache<OpenAiCompatFactory>,
    configs: Vec<ProviderConfig>,
    history: Vec<Value>,
}

impl Session {
    pub fn new(configs: Vec<ProviderConfig>) -> Self {
        Self {
            cache: ClientCache::default(),
            configs,
            history: vec![message::text("assistant", GREETING)],
        }
    }

    /// Session with both provider accounts loaded from the environment.
    pub fn from_env() -> Self {
        let configs = [Provider::OpenAi, Provider::Gemini]
            .into_iter()
            .filter_map(|p| ProviderConfig::from_env(p.display_name()).ok())
            .collect();
        Self::new(configs)
    }

    /// Client for the model's provider, reused while its key and endpoint are unchanged.
    pub fn client_for(&mut self, model: &Model) -> Result<Arc<ApiClient>, ClientError> {
        let config = match self.configs.iter().find(|c| c.provider == model.provider) {
            Some(c) => c.clone(),
            None => ProviderConfig::from_env(model.provider.display_name())?,
        };
        self.cache.get_client(&config)
    }

    pub fn history(&self) -> &[Value] {
        &self.history
    }

    /// Send a user message in the running conversation and return the reply.
    ///
    /// History only grows when the call succeeds.
    pub async fn send(&mut self, model: &Model, text: &str) -> Result<String, LlmError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InputError::EmptyQuery.into());
        }
        let client = self.client_for(model)?;

        self.history.push(message::text("user", text));
        match llm::chat(&client, model.model_name, &self.history).await {
            Ok(reply) => {
                self.history.push(message::text("assistant", &reply));
                Ok(reply)
            }
            Err(e) => {
                if self.history.last().and_then(message::role) == Some("user") {
                    self.history.pop();
                }
                log::warn!("Chat with {} failed: {}", model.model_name, e);
                Err(e.into())
            }
        }
    }

    /// Drop the conversation, keeping cached clients.
    pub fn reset(&mut self) {
        self.history.truncate(1);
    }
}

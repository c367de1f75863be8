//! API client construction and the per-session client cache.

mod api;
mod cache;

pub use api::{ApiClient, OpenAiCompatFactory};
pub use cache::ClientCache;

use crate::core::config::ConfigError;

/// Errors obtaining a client for a provider config.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Base URL is required for {0} but not found in config")]
    MissingBaseUrl(String),
    #[error("Failed to initialize API client for {name}: {reason}")]
    Init { name: String, reason: String },
}

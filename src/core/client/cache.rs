//! Session-scoped client cache keyed by provider name.
//!
//! A cached client stays valid only while the requested `(key, base_url)` equals the
//! pair it was built with. There is no expiry: validity is re-checked on every call.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::config::ProviderConfig;

use super::ClientError;

/// Constructs clients for a provider config. `key` is the already-validated API key.
pub trait ClientFactory {
    type Client;

    fn build(&self, config: &ProviderConfig, key: &str) -> Result<Self::Client, ClientError>;
}

struct CachedClient<C> {
    client: Arc<C>,
    key: Option<String>,
    base_url: Option<String>,
}

impl<C> CachedClient<C> {
    fn matches(&self, config: &ProviderConfig) -> bool {
        self.key == config.key && self.base_url == config.base_url
    }
}

/// Per-session cache of initialized clients.
pub struct ClientCache<F: ClientFactory> {
    factory: F,
    entries: HashMap<String, CachedClient<F::Client>>,
}

impl<F: ClientFactory + Default> Default for ClientCache<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: ClientFactory> ClientCache<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            entries: HashMap::new(),
        }
    }

    /// Return the cached client for `config.name` if its key and base URL still match,
    /// otherwise build, store, and return a new one.
    ///
    /// A missing key fails before the factory is called and leaves the cache untouched.
    /// A failed build removes any previous entry for the same name.
    pub fn get_client(&mut self, config: &ProviderConfig) -> Result<Arc<F::Client>, ClientError> {
        let key = config.require_key()?;

        if let Some(entry) = self.entries.get(&config.name)
            && entry.matches(config)
        {
            log::debug!("Reusing API client for {}", config.name);
            return Ok(Arc::clone(&entry.client));
        }

        log::info!("Initializing API client for {}", config.name);
        match self.factory.build(config, key) {
            Ok(client) => {
                let client = Arc::new(client);
                self.entries.insert(
                    config.name.clone(),
                    CachedClient {
                        client: Arc::clone(&client),
                        key: config.key.clone(),
                        base_url: config.base_url.clone(),
                    },
                );
                Ok(client)
            }
            Err(e) => {
                self.entries.remove(&config.name);
                log::warn!("Failed to initialize API client for {}: {}", config.name, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
impl<F: ClientFactory> ClientCache<F> {
    /// True if a client is cached under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The `(key, base_url)` identity stored for `name`.
    pub fn identity(&self, name: &str) -> Option<(Option<&str>, Option<&str>)> {
        self.entries
            .get(name)
            .map(|e| (e.key.as_deref(), e.base_url.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

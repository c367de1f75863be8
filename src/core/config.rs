//! Provider and service configuration loaded from the environment (`.env` via dotenv).
//!
//! Each external account is described by a small config struct. AI providers are
//! resolved to a [`Provider`] variant once, when the config is built, so later code
//! never branches on name substrings.

use std::env;
use std::fmt;

/// Default OpenAI endpoint used when `OPENAI_BASE_URL` is unset.
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Errors building or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
    #[error("API key for {name} not found. Set {env_var} in your .env file")]
    MissingApiKey { name: String, env_var: String },
}

/// Supported AI provider families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    /// Resolve a provider from a configured account name.
    ///
    /// OpenAI covers the chat and DALL-E products; Gemini covers Imagen as well.
    pub fn from_name(name: &str) -> Option<Self> {
        if ["OpenAI", "DALL-E", "ChatGPT"]
            .iter()
            .any(|s| name.contains(s))
        {
            Some(Provider::OpenAi)
        } else if ["Gemini", "Imagen"].iter().any(|s| name.contains(s)) {
            Some(Provider::Gemini)
        } else {
            None
        }
    }

    /// Display name, also used as the cache slot name.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Gemini => "Gemini",
        }
    }

    /// Env var holding the API key.
    pub fn key_env_var(self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Gemini => "GEMINI_API_KEY",
        }
    }

    fn base_url_env_var(self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_BASE_URL",
            Provider::Gemini => "GEMINI_BASE_URL",
        }
    }

    fn help_url_env_var(self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_URL",
            Provider::Gemini => "GEMINI_API_URL",
        }
    }

    fn default_help_url(self) -> &'static str {
        match self {
            Provider::OpenAi => "https://platform.openai.com/api-keys",
            Provider::Gemini => "https://aistudio.google.com/app/apikey",
        }
    }

    /// Endpoint used when no base URL is configured. Gemini has none.
    pub fn default_base_url(self) -> Option<&'static str> {
        match self {
            Provider::OpenAi => Some(OPENAI_DEFAULT_BASE_URL),
            Provider::Gemini => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Credential + endpoint bundle for one AI provider account.
///
/// Cache identity is the `(key, base_url)` pair; `url` is only a help link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub name: String,
    pub provider: Provider,
    pub key: Option<String>,
    pub base_url: Option<String>,
    pub url: Option<String>,
}

impl ProviderConfig {
    /// Build a config, resolving the provider family from `name`.
    pub fn new(
        name: impl Into<String>,
        key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let provider = Provider::from_name(&name)
            .ok_or_else(|| ConfigError::UnsupportedProvider(name.clone()))?;
        Ok(Self {
            name,
            provider,
            key: non_empty(key),
            base_url: non_empty(base_url),
            url: None,
        })
    }

    /// Load the config for the account called `name` using `lookup` for variable access.
    ///
    /// The name picks the provider family, and with it the variables read.
    pub fn load_with<F>(name: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(name, None, None)?;
        let provider = config.provider;
        config.key = non_empty(lookup(provider.key_env_var()));
        config.base_url = non_empty(lookup(provider.base_url_env_var()));
        config.url = Some(
            non_empty(lookup(provider.help_url_env_var()))
                .unwrap_or_else(|| provider.default_help_url().to_string()),
        );
        Ok(config)
    }

    /// Load the config for the account called `name` from the process environment.
    pub fn from_env(name: &str) -> Result<Self, ConfigError> {
        Self::load_with(name, env_lookup)
    }

    /// Fail with a user-facing error when no key is configured.
    pub fn require_key(&self) -> Result<&str, ConfigError> {
        self.key.as_deref().ok_or_else(|| ConfigError::MissingApiKey {
            name: self.name.clone(),
            env_var: self.provider.key_env_var().to_string(),
        })
    }
}

/// NewsAPI account.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub key: Option<String>,
    pub url: String,
    pub base_url: String,
}

impl NewsConfig {
    pub const KEY_ENV: &'static str = "NEWS_API_KEY";

    pub fn load_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            key: non_empty(lookup(Self::KEY_ENV)),
            url: non_empty(lookup("NEWS_API_URL"))
                .unwrap_or_else(|| "https://newsapi.org/register".to_string()),
            base_url: non_empty(lookup("NEWS_BASE_URL"))
                .unwrap_or_else(|| "https://newsapi.org/v2".to_string()),
        }
    }

    pub fn from_env() -> Self {
        Self::load_with(env_lookup)
    }
}

/// X (Twitter) account credentials: the app's consumer key pair and the user's
/// access token pair, as issued for OAuth 1.0a.
#[derive(Debug, Clone, Default)]
pub struct XConfig {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub api_key_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
    pub base_url: String,
}

impl XConfig {
    /// Variables that must all be set before anything can be posted.
    pub const CREDENTIAL_ENVS: [&'static str; 4] = [
        "X_API_KEY",
        "X_API_KEY_SECRET",
        "X_ACCESS_TOKEN",
        "X_ACCESS_TOKEN_SECRET",
    ];

    pub fn load_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            username: non_empty(lookup("X_USERNAME")),
            api_key: non_empty(lookup("X_API_KEY")),
            api_key_secret: non_empty(lookup("X_API_KEY_SECRET")),
            access_token: non_empty(lookup("X_ACCESS_TOKEN")),
            access_token_secret: non_empty(lookup("X_ACCESS_TOKEN_SECRET")),
            base_url: non_empty(lookup("X_BASE_URL"))
                .unwrap_or_else(|| "https://api.twitter.com".to_string()),
        }
    }

    pub fn from_env() -> Self {
        Self::load_with(env_lookup)
    }

    pub fn has_credentials(&self) -> bool {
        [
            &self.api_key,
            &self.api_key_secret,
            &self.access_token,
            &self.access_token_secret,
        ]
        .iter()
        .all(|v| v.is_some())
    }
}

fn env_lookup(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

//! Posting generated text to X.

use serde_json::{Value, json};

use crate::core::config::XConfig;
use crate::core::llm::ApiError;
use crate::core::oauth::{self, Credentials};

/// X rejects tweets longer than this.
pub const MAX_TWEET_CHARS: usize = 280;

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error(
        "X credentials not found. Set X_API_KEY, X_API_KEY_SECRET, X_ACCESS_TOKEN and X_ACCESS_TOKEN_SECRET in your .env file"
    )]
    MissingCredentials,
    #[error("Could not sign the X request: {0}")]
    Signing(String),
    #[error("Tweet is empty")]
    EmptyText,
    #[error("Tweet is {0} characters; the limit is 280")]
    TooLong(usize),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Posts tweets with the configured user credentials, signed with OAuth 1.0a.
pub struct XPoster {
    config: XConfig,
    http: reqwest::Client,
}

impl XPoster {
    pub fn new(config: XConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Post `text`. Returns the status URL when a username is configured, `None` when the
    /// post succeeded but no URL can be built.
    pub async fn post(&self, text: &str) -> Result<Option<String>, PostError> {
        let creds = self.credentials().ok_or(PostError::MissingCredentials)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(PostError::EmptyText);
        }
        let len = text.chars().count();
        if len > MAX_TWEET_CHARS {
            return Err(PostError::TooLong(len));
        }

        let url = format!("{}/2/tweets", self.config.base_url.trim_end_matches('/'));
        let authorization = oauth::authorization_header(
            "POST",
            &url,
            &creds,
            &oauth::new_nonce(),
            chrono::Utc::now().timestamp(),
        )
        .map_err(PostError::Signing)?;
        let response = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        if !status.is_success() {
            return Err(ApiError::from_status(status, &body).into());
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ApiError::UnexpectedResponse(format!("invalid post response: {}", e)))?;
        let id = value
            .pointer("/data/id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ApiError::UnexpectedResponse("post response has no tweet id".into()))?;
        log::info!("Posted tweet {}", id);

        Ok(self.status_url(id))
    }

    fn credentials(&self) -> Option<Credentials<'_>> {
        Some(Credentials {
            consumer_key: self.config.api_key.as_deref()?,
            consumer_secret: self.config.api_key_secret.as_deref()?,
            token: self.config.access_token.as_deref()?,
            token_secret: self.config.access_token_secret.as_deref()?,
        })
    }

    fn status_url(&self, id: &str) -> Option<String> {
        self.config
            .username
            .as_deref()
            .map(|user| format!("https://x.com/{}/status/{}", user, id))
    }
}

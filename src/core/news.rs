//! NewsAPI `everything` search.

use serde::Deserialize;

use crate::core::config::NewsConfig;
use crate::core::llm::ApiError;

/// Some news sites reject requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("News API key is missing. Set NEWS_API_KEY in your .env file")]
    MissingApiKey,
    #[error("Please enter a topic to search for")]
    EmptyQuery,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// One article from a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Deserialize)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_else(|| "(untitled)".to_string()),
            description: raw.description,
            url: raw.url.unwrap_or_default(),
            image_url: raw.url_to_image.filter(|u| !u.is_empty()),
            source: raw.source.and_then(|s| s.name),
            published_at: raw.published_at,
        }
    }
}

/// Client for the news search endpoint.
pub struct NewsClient {
    config: NewsConfig,
    http: reqwest::Client,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Search articles matching `query`. The key is checked before any request is made.
    pub async fn search(&self, query: &str) -> Result<Vec<Article>, NewsError> {
        let key = self.config.key.as_deref().ok_or(NewsError::MissingApiKey)?;
        let query = query.trim();
        if query.is_empty() {
            return Err(NewsError::EmptyQuery);
        }

        let url = format!("{}/everything", self.config.base_url.trim_end_matches('/'));
        log::debug!("News search: {}", query);
        let response = self
            .http
            .get(url)
            .query(&[("q", query), ("apiKey", key)])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        if !status.is_success() {
            return Err(ApiError::from_status(status, &body).into());
        }

        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::UnexpectedResponse(format!("invalid news response: {}", e)))?;
        if parsed.status != "ok" {
            let msg = parsed
                .message
                .unwrap_or_else(|| format!("status {}", parsed.status));
            return Err(ApiError::Api(msg).into());
        }
        Ok(parsed.articles.into_iter().map(Article::from).collect())
    }
}

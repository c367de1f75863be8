//! Tweet row types.

use chrono::{DateTime, Utc};

use crate::core::util;

/// Stored in `posted_url` when a post succeeded but no status URL could be built.
pub const POSTED_MARKER: &str = "posted";

/// Fields supplied by the caller when saving a tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTweet {
    pub model_name: String,
    pub personality: String,
    pub content_type: String,
    pub content_format: String,
    pub tweet_text: String,
    pub posted_url: Option<String>,
}

/// One persisted tweet. Only `posted_url` changes after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRecord {
    pub id: i64,
    pub model_name: String,
    pub personality: String,
    pub content_type: String,
    pub content_format: String,
    pub tweet_text: String,
    pub posted_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TweetRecord {
    /// Short single-line preview of the tweet text.
    pub fn preview(&self, max_len: usize) -> String {
        util::one_line_preview(&self.tweet_text, max_len)
    }

    pub fn is_posted(&self) -> bool {
        self.posted_url.is_some()
    }
}

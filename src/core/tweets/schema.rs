//! Table definition. Single table, no versioning.

pub(super) const CREATE_TWEETS: &str = "
CREATE TABLE IF NOT EXISTS tweets (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    model_name     TEXT,
    personality    TEXT,
    content_type   TEXT,
    content_format TEXT,
    tweet_text     TEXT,
    posted_url     TEXT,
    created_at     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_tweets_created_at ON tweets(created_at);
";

pub(super) const SELECT_COLUMNS: &str = "id, model_name, personality, content_type, content_format, tweet_text, posted_url, created_at";

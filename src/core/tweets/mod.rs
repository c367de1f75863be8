//! Persistence of generated tweets in a single SQLite table.

mod record;
mod schema;
mod store;

pub use record::{NewTweet, POSTED_MARKER};
pub use store::TweetStore;

/// Storage failures. Only visible inside the store; callers see `None`/`false`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests;

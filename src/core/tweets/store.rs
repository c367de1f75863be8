//! SQLite-backed tweet store.
//!
//! Every operation opens its own connection and drops it before returning, so no call
//! holds the database beyond its own scope. Errors are logged here and reported to the
//! caller as `None` / `false`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::core::paths;

use super::StoreError;
use super::record::{NewTweet, TweetRecord};
use super::schema::{CREATE_TWEETS, SELECT_COLUMNS};

/// Handle to the tweet database file.
#[derive(Debug, Clone)]
pub struct TweetStore {
    path: PathBuf,
}

impl TweetStore {
    /// Open (or create) the database at `path`, creating parent directories and the table.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self { path };
        store.connect()?.execute_batch(CREATE_TWEETS)?;
        Ok(store)
    }

    /// Open the database at the default location (see [`paths::tweets_db_path`]).
    pub fn open_default() -> Result<Self, StoreError> {
        let path = paths::tweets_db_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "No data directory")
        })?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Insert a tweet and return its id. `None` if the write failed (nothing persisted).
    pub fn add(&self, tweet: &NewTweet) -> Option<i64> {
        match self.try_add(tweet) {
            Ok(id) => {
                log::info!("Tweet saved to database with id {}", id);
                Some(id)
            }
            Err(e) => {
                log::error!("Error adding tweet to database: {}", e);
                None
            }
        }
    }

    /// Set `posted_url` on an existing tweet. `false` if the id is absent or the write failed.
    pub fn update_posted_url(&self, id: i64, url: &str) -> bool {
        match self.try_update_posted_url(id, url) {
            Ok(true) => {
                log::info!("Tweet {} updated with posted_url {}", id, url);
                true
            }
            Ok(false) => {
                log::warn!("Tweet with id {} not found", id);
                false
            }
            Err(e) => {
                log::error!("Error updating tweet {}: {}", id, e);
                false
            }
        }
    }

    /// All tweets, newest first. `None` if the read failed.
    pub fn list_all(&self) -> Option<Vec<TweetRecord>> {
        self.try_list_all()
            .map_err(|e| log::error!("Error listing tweets: {}", e))
            .ok()
    }

    /// One tweet by id. `None` if absent or the read failed.
    pub fn get(&self, id: i64) -> Option<TweetRecord> {
        match self.try_get(id) {
            Ok(record) => record,
            Err(e) => {
                log::error!("Error reading tweet {}: {}", id, e);
                None
            }
        }
    }

    fn try_add(&self, tweet: &NewTweet) -> Result<i64, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO tweets (model_name, personality, content_type, content_format, tweet_text, posted_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                tweet.model_name,
                tweet.personality,
                tweet.content_type,
                tweet.content_format,
                tweet.tweet_text,
                tweet.posted_url,
                Utc::now(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    fn try_update_posted_url(&self, id: i64, url: &str) -> Result<bool, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let changed = tx.execute(
            "UPDATE tweets SET posted_url = ?2 WHERE id = ?1",
            params![id, url],
        )?;
        tx.commit()?;
        Ok(changed > 0)
    }

    fn try_list_all(&self) -> Result<Vec<TweetRecord>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM tweets ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))?;
        let rows = stmt.query_map([], row_to_record)?;
        let records = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn try_get(&self, id: i64) -> Result<Option<TweetRecord>, StoreError> {
        let conn = self.connect()?;
        let record = conn
            .query_row(
                &format!("SELECT {} FROM tweets WHERE id = ?1", SELECT_COLUMNS),
                [id],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }
}

fn row_to_record(row: &rusqlite::Row) -> Result<TweetRecord, rusqlite::Error> {
    let created_at: DateTime<Utc> = row.get(7)?;
    Ok(TweetRecord {
        id: row.get(0)?,
        model_name: row.get(1)?,
        personality: row.get(2)?,
        content_type: row.get(3)?,
        content_format: row.get(4)?,
        tweet_text: row.get(5)?,
        posted_url: row.get(6)?,
        created_at,
    })
}

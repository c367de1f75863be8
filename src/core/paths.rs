//! Centralized path helpers for config, cache, and data directories.

use std::path::PathBuf;

use crate::core::app;

/// Env var overriding the tweet database location.
pub const DB_PATH_ENV: &str = "TOOLHUB_DB_PATH";

/// Project directories (config, cache, data) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/toolhub/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Cache directory (~/.cache/toolhub/). Holds the log file.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Data directory (~/.local/share/toolhub/).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_dir().to_path_buf())
}

/// Tweet database path: `TOOLHUB_DB_PATH` if set and non-empty, else `<data_dir>/tweets.db`.
pub fn tweets_db_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(DB_PATH_ENV)
        && !p.trim().is_empty()
    {
        return Some(PathBuf::from(p));
    }
    data_dir().map(|d| d.join("tweets.db"))
}

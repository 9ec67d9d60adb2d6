// Runtime configuration.
// Read from FEEDCACHE_* environment variables with XDG defaults.

use std::path::PathBuf;

use url::Url;

use crate::cache::paths;
use crate::error::{FeedError, Result};

pub const STORE_VAR: &str = "FEEDCACHE_STORE";
pub const URL_VAR: &str = "FEEDCACHE_URL";
pub const LOG_VAR: &str = "FEEDCACHE_LOG";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the feed store document.
    pub store_path: PathBuf,
    /// Feed endpoint. Without one, only the cache is consulted.
    pub feed_url: Option<Url>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_path = match get(STORE_VAR) {
            Some(path) => PathBuf::from(path),
            None => paths::store_path().ok_or_else(|| {
                FeedError::Config(format!("no cache directory available, set {STORE_VAR}"))
            })?,
        };

        let feed_url = get(URL_VAR)
            .map(|raw| {
                Url::parse(raw.trim())
                    .map_err(|e| FeedError::Config(format!("{URL_VAR} is not a valid URL: {e}")))
            })
            .transpose()?;

        let log_level = get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            store_path,
            feed_url,
            log_level,
        })
    }
}

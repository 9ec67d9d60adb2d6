// Persisted cache types.
// The record shape stores serialize, kept apart from the domain FeedItem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::StoreError;
use crate::feed::FeedItem;

/// A feed item as written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFeedRecord {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl From<&FeedItem> for LocalFeedRecord {
    fn from(item: &FeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description.clone(),
            location: item.location.clone(),
            url: item.url.clone(),
        }
    }
}

impl From<LocalFeedRecord> for FeedItem {
    fn from(record: LocalFeedRecord) -> Self {
        FeedItem::new(record.id, record.description, record.location, record.url)
    }
}

/// Convert domain items to records, keeping order.
pub fn to_local(feed: &[FeedItem]) -> Vec<LocalFeedRecord> {
    feed.iter().map(LocalFeedRecord::from).collect()
}

/// Convert records back to domain items, keeping order.
pub fn to_models(feed: Vec<LocalFeedRecord>) -> Vec<FeedItem> {
    feed.into_iter().map(FeedItem::from).collect()
}

/// The whole cache: every record plus the single time it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub feed: Vec<LocalFeedRecord>,
    pub timestamp: DateTime<Utc>,
}

/// What a store reports for a retrieval.
#[derive(Debug)]
pub enum RetrievalOutcome {
    /// Nothing was ever stored, or the cache was deleted.
    Empty,
    Found(CacheSnapshot),
    Failure(StoreError),
}

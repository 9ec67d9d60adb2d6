// Feed domain model.
// The item type handed between the remote loader, the cache and callers.

use url::Url;
use uuid::Uuid;

use crate::error::Result;

/// Completion for a feed load. May be invoked on any thread.
pub type LoadCompletion = Box<dyn FnOnce(Result<Vec<FeedItem>>) + Send + 'static>;

/// A single image in the feed.
///
/// Deliberately has no serde derives: only `LocalFeedRecord` is persisted
/// and only the mapper's private wire type is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl FeedItem {
    pub fn new(id: Uuid, description: Option<String>, location: Option<String>, url: Url) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }
}

/// Anything that can deliver the feed through a completion.
pub trait FeedLoader {
    fn load(&self, completion: LoadCompletion);
}

// Feed endpoint response mapping.
// Decodes the JSON payload into domain FeedItems.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::{FeedError, Result};
use crate::feed::FeedItem;

const OK_200: u16 = 200;

/// Response wrapper for the items list.
#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Wire representation of one item. Kept private so the API schema never
/// leaks into the domain or cache types.
#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

pub struct FeedItemsMapper;

impl FeedItemsMapper {
    pub fn map(body: &[u8], status: u16) -> Result<Vec<FeedItem>> {
        if status != OK_200 {
            return Err(FeedError::InvalidData);
        }

        let root: Root = serde_json::from_slice(body).map_err(|_| FeedError::InvalidData)?;
        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}

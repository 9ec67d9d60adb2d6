// Remote feed loader.
// Fetches the feed from its endpoint and maps the response.

use tracing::{debug, warn};
use url::Url;

use crate::error::{FeedError, Result};
use crate::feed::FeedItem;

use super::client::HttpClient;
use super::mapper::FeedItemsMapper;

pub struct RemoteFeedLoader<C: HttpClient> {
    url: Url,
    client: C,
}

impl<C: HttpClient> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: C) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode the feed. Transport failures surface as
    /// `Connectivity`, bad statuses and payloads as `InvalidData`.
    pub async fn load(&self) -> Result<Vec<FeedItem>> {
        let response = self.client.get(&self.url).await.map_err(|e| match e {
            FeedError::Connectivity(_) => e,
            other => FeedError::Connectivity(other.to_string()),
        })?;

        debug!(url = %self.url, status = response.status, bytes = response.body.len(), "feed response");
        let items = FeedItemsMapper::map(&response.body, response.status);
        if let Err(err) = &items {
            warn!(url = %self.url, status = response.status, error = %err, "feed response rejected");
        }
        items
    }
}

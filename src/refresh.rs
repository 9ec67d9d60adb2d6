// Feed refresh flow.
// Validates the cache, prefers a fresh remote feed and falls back to the cache.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::api::{HttpClient, RemoteFeedLoader};
use crate::cache::{FileFeedStore, LocalFeedLoader};
use crate::error::{FeedError, Result, StoreError};
use crate::feed::FeedItem;

/// Run one refresh against `store`.
///
/// Remote items are saved and returned when the fetch succeeds; otherwise the
/// cached feed is loaded. The store is flushed before returning so the purge
/// queued by `validate_cache` has run even if the runtime shuts down next.
pub async fn refresh<C, F>(
    store: Arc<FileFeedStore>,
    current_date: F,
    remote: Option<RemoteFeedLoader<C>>,
) -> Result<Vec<FeedItem>>
where
    C: HttpClient,
    F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
{
    let local = LocalFeedLoader::new(Arc::clone(&store), current_date);
    local.validate_cache();

    let result = match remote {
        Some(remote) => match remote.load().await {
            Ok(feed) => {
                info!(items = feed.len(), "fetched remote feed");
                if let Err(e) = save(&local, &feed).await {
                    warn!(error = %e, "failed to cache remote feed");
                }
                Ok(feed)
            }
            Err(e) => {
                warn!(url = %remote.url(), error = %e, "remote feed unavailable, using cache");
                load(&local).await
            }
        },
        None => load(&local).await,
    };

    store.flush().await;
    result
}

async fn save(local: &LocalFeedLoader<FileFeedStore>, feed: &[FeedItem]) -> Result<()> {
    let (tx, rx) = oneshot::channel();
    local.save(
        feed,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );
    rx.await
        .map_err(|_| FeedError::InsertionFailed(StoreError::Closed))?
}

async fn load(local: &LocalFeedLoader<FileFeedStore>) -> Result<Vec<FeedItem>> {
    let (tx, rx) = oneshot::channel();
    local.load(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.await
        .map_err(|_| FeedError::RetrievalFailed(StoreError::Closed))?
}

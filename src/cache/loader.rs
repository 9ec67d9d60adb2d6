// Local feed loader.
// Saves, loads and validates the cached feed on top of a FeedStore.

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{FeedError, Result};
use crate::feed::{FeedItem, FeedLoader, LoadCompletion};

use super::policy::FeedCachePolicy;
use super::record::{LocalFeedRecord, RetrievalOutcome, to_local, to_models};
use super::store::FeedStore;

/// Completion for a save. May be invoked on any thread.
pub type SaveCompletion = Box<dyn FnOnce(Result<()>) + Send + 'static>;

/// Source of the current time, injected so tests can pin it.
pub type CurrentDate = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

struct Shared<S> {
    store: Arc<S>,
    current_date: CurrentDate,
}

/// Cache manager for the feed.
///
/// Store completions only hold a `Weak` handle to the loader's state. Once the
/// loader is dropped, completions that arrive later are discarded without
/// calling back into the caller or messaging the store again.
pub struct LocalFeedLoader<S: FeedStore> {
    shared: Arc<Shared<S>>,
}

impl<S: FeedStore> LocalFeedLoader<S> {
    pub fn new<F>(store: Arc<S>, current_date: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                store,
                current_date: Arc::new(current_date),
            }),
        }
    }

    fn handle(&self) -> Weak<Shared<S>> {
        Arc::downgrade(&self.shared)
    }

    /// Replace the cache with `feed`. The previous snapshot is deleted first;
    /// insertion is only attempted once that deletion succeeded.
    pub fn save(&self, feed: &[FeedItem], completion: SaveCompletion) {
        let records = to_local(feed);
        let weak = self.handle();

        debug!(items = records.len(), "deleting cached feed before save");
        self.shared
            .store
            .delete_cached_feed(Box::new(move |deletion| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };

                match deletion {
                    Ok(()) => Shared::cache(&shared, records, completion),
                    Err(err) => {
                        warn!(error = %err, "cache deletion failed, skipping insert");
                        completion(Err(FeedError::DeletionFailed(err)));
                    }
                }
            }));
    }

    /// Deliver the cached feed if it is still within the max age. Expired and
    /// empty caches both deliver an empty feed. Never modifies the store.
    pub fn load(&self, completion: LoadCompletion) {
        let weak = self.handle();

        self.shared.store.retrieve(Box::new(move |outcome| {
            let Some(shared) = weak.upgrade() else {
                return;
            };

            match outcome {
                RetrievalOutcome::Failure(err) => {
                    completion(Err(FeedError::RetrievalFailed(err)));
                }
                RetrievalOutcome::Found(snapshot) => {
                    if FeedCachePolicy::validate(snapshot.timestamp, (shared.current_date)()) {
                        completion(Ok(to_models(snapshot.feed)));
                    } else {
                        debug!(cached_at = %snapshot.timestamp, "cached feed expired");
                        completion(Ok(Vec::new()));
                    }
                }
                RetrievalOutcome::Empty => completion(Ok(Vec::new())),
            }
        }));
    }

    /// Purge the cache when it is expired or cannot be read.
    /// Deletion errors are ignored.
    pub fn validate_cache(&self) {
        let weak = self.handle();

        self.shared.store.retrieve(Box::new(move |outcome| {
            let Some(shared) = weak.upgrade() else {
                return;
            };

            let purge = match outcome {
                RetrievalOutcome::Failure(err) => {
                    warn!(error = %err, "cache unreadable, deleting");
                    true
                }
                RetrievalOutcome::Found(snapshot) => {
                    let valid =
                        FeedCachePolicy::validate(snapshot.timestamp, (shared.current_date)());
                    if !valid {
                        debug!(cached_at = %snapshot.timestamp, "cache expired, deleting");
                    }
                    !valid
                }
                RetrievalOutcome::Empty => false,
            };

            if purge {
                shared.store.delete_cached_feed(Box::new(|result| {
                    if let Err(err) = result {
                        debug!(error = %err, "ignoring failed cache purge");
                    }
                }));
            }
        }));
    }
}

impl<S: FeedStore> Shared<S> {
    fn cache(
        shared: &Arc<Self>,
        records: Vec<LocalFeedRecord>,
        completion: SaveCompletion,
    ) {
        let weak = Arc::downgrade(shared);
        let timestamp = (shared.current_date)();

        debug!(items = records.len(), %timestamp, "inserting feed into cache");
        shared.store.insert(
            records,
            timestamp,
            Box::new(move |insertion| {
                if weak.upgrade().is_none() {
                    return;
                }
                completion(insertion.map_err(FeedError::InsertionFailed));
            }),
        );
    }
}

impl<S: FeedStore> FeedLoader for LocalFeedLoader<S> {
    fn load(&self, completion: LoadCompletion) {
        LocalFeedLoader::load(self, completion);
    }
}

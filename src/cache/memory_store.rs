// In-memory feed store.
// Keeps the snapshot behind a mutex and completes on the calling thread.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::record::{CacheSnapshot, LocalFeedRecord, RetrievalOutcome};
use super::store::{DeletionCompletion, FeedStore, InsertionCompletion, RetrievalCompletion};

#[derive(Debug, Default)]
pub struct InMemoryFeedStore {
    snapshot: Mutex<Option<CacheSnapshot>>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing snapshot in place.
    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<CacheSnapshot>> {
        // The snapshot is only ever replaced whole, so a poisoned lock is still consistent.
        self.snapshot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FeedStore for InMemoryFeedStore {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        self.lock().take();
        completion(Ok(()));
    }

    fn insert(
        &self,
        feed: Vec<LocalFeedRecord>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    ) {
        *self.lock() = Some(CacheSnapshot { feed, timestamp });
        completion(Ok(()));
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        // Release the lock before calling out so completions may re-enter.
        let outcome = match self.lock().clone() {
            Some(snapshot) => RetrievalOutcome::Found(snapshot),
            None => RetrievalOutcome::Empty,
        };
        completion(outcome);
    }
}

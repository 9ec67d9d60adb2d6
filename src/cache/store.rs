// Storage contract for the feed cache.
// Backends implement these three operations; the loader only talks to this trait.

use chrono::{DateTime, Utc};

use crate::error::StoreError;

use super::record::{LocalFeedRecord, RetrievalOutcome};

pub type DeletionCompletion = Box<dyn FnOnce(Result<(), StoreError>) + Send + 'static>;
pub type InsertionCompletion = Box<dyn FnOnce(Result<(), StoreError>) + Send + 'static>;
pub type RetrievalCompletion = Box<dyn FnOnce(RetrievalOutcome) + Send + 'static>;

/// A persistence backend holding at most one cache snapshot.
///
/// Every completion is invoked exactly once and may run on any thread.
/// Callers are responsible for dispatching to their own context if needed.
pub trait FeedStore: Send + Sync + 'static {
    /// Remove the stored snapshot. Succeeds when nothing is stored.
    fn delete_cached_feed(&self, completion: DeletionCompletion);

    /// Replace the stored snapshot with `feed` written at `timestamp`.
    fn insert(
        &self,
        feed: Vec<LocalFeedRecord>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    );

    fn retrieve(&self, completion: RetrievalCompletion);
}

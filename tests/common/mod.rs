//! Shared helpers for the cache integration tests.
//!
//! `FeedStoreSpy` records every message it receives and holds on to the
//! completions so each test decides when, and how, the store answers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use feedcache::cache::{
    CacheSnapshot, DeletionCompletion, FeedStore, InsertionCompletion, LocalFeedLoader,
    LocalFeedRecord, RetrievalCompletion, RetrievalOutcome,
};
use feedcache::{FeedItem, StoreError};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum ReceivedMessage {
    DeleteCachedFeed,
    Insert(Vec<LocalFeedRecord>, DateTime<Utc>),
    Retrieve,
}

#[derive(Default)]
struct SpyState {
    messages: Vec<ReceivedMessage>,
    deletions: Vec<Option<DeletionCompletion>>,
    insertions: Vec<Option<InsertionCompletion>>,
    retrievals: Vec<Option<RetrievalCompletion>>,
}

#[derive(Default)]
pub struct FeedStoreSpy {
    state: Mutex<SpyState>,
}

impl FeedStoreSpy {
    pub fn received_messages(&self) -> Vec<ReceivedMessage> {
        self.state.lock().unwrap().messages.clone()
    }

    // Completions are taken out before being called so they may message the
    // spy again without deadlocking.

    fn take_deletion(&self, index: usize) -> DeletionCompletion {
        self.state.lock().unwrap().deletions[index]
            .take()
            .expect("deletion already completed")
    }

    fn take_insertion(&self, index: usize) -> InsertionCompletion {
        self.state.lock().unwrap().insertions[index]
            .take()
            .expect("insertion already completed")
    }

    fn take_retrieval(&self, index: usize) -> RetrievalCompletion {
        self.state.lock().unwrap().retrievals[index]
            .take()
            .expect("retrieval already completed")
    }

    pub fn complete_deletion_with_error(&self, error: StoreError, index: usize) {
        self.take_deletion(index)(Err(error));
    }

    pub fn complete_deletion_successfully(&self, index: usize) {
        self.take_deletion(index)(Ok(()));
    }

    pub fn complete_insertion_with_error(&self, error: StoreError, index: usize) {
        self.take_insertion(index)(Err(error));
    }

    pub fn complete_insertion_successfully(&self, index: usize) {
        self.take_insertion(index)(Ok(()));
    }

    pub fn complete_retrieval_with_error(&self, error: StoreError, index: usize) {
        self.take_retrieval(index)(RetrievalOutcome::Failure(error));
    }

    pub fn complete_retrieval_with_empty(&self, index: usize) {
        self.take_retrieval(index)(RetrievalOutcome::Empty);
    }

    pub fn complete_retrieval(
        &self,
        feed: Vec<LocalFeedRecord>,
        timestamp: DateTime<Utc>,
        index: usize,
    ) {
        self.take_retrieval(index)(RetrievalOutcome::Found(CacheSnapshot { feed, timestamp }));
    }
}

impl FeedStore for FeedStoreSpy {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        let mut state = self.state.lock().unwrap();
        state.deletions.push(Some(completion));
        state.messages.push(ReceivedMessage::DeleteCachedFeed);
    }

    fn insert(
        &self,
        feed: Vec<LocalFeedRecord>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    ) {
        let mut state = self.state.lock().unwrap();
        state.insertions.push(Some(completion));
        state.messages.push(ReceivedMessage::Insert(feed, timestamp));
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        let mut state = self.state.lock().unwrap();
        state.retrievals.push(Some(completion));
        state.messages.push(ReceivedMessage::Retrieve);
    }
}

/// Loader wired to a fresh spy with a pinned clock.
pub fn make_sut(now: DateTime<Utc>) -> (LocalFeedLoader<FeedStoreSpy>, Arc<FeedStoreSpy>) {
    let store = Arc::new(FeedStoreSpy::default());
    let sut = LocalFeedLoader::new(Arc::clone(&store), move || now);
    (sut, store)
}

/// Results captured from completions, shared with the closure.
pub type Captured<T> = Arc<Mutex<Vec<T>>>;

pub fn capture<T: Send + 'static>() -> (Captured<T>, Box<dyn FnOnce(T) + Send + 'static>) {
    let captured: Captured<T> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    (captured, Box::new(move |value| sink.lock().unwrap().push(value)))
}

pub fn any_error() -> StoreError {
    StoreError::Other("any error".to_string())
}

pub fn any_url() -> Url {
    Url::parse("http://any-url.com").unwrap()
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 41, 0).unwrap()
}

pub fn unique_image() -> FeedItem {
    FeedItem::new(
        Uuid::new_v4(),
        Some("any".to_string()),
        Some("any".to_string()),
        any_url(),
    )
}

/// Domain items and the records a store would hold for them.
pub fn unique_image_feed() -> (Vec<FeedItem>, Vec<LocalFeedRecord>) {
    let models = vec![unique_image(), unique_image()];
    let local = models.iter().map(LocalFeedRecord::from).collect();
    (models, local)
}

pub fn seven_days_before(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Days::new(7)
}

pub fn seconds(n: i64) -> Duration {
    Duration::seconds(n)
}

// Cache module for the local feed cache.
// Storage contract, staleness policy, store backends and the loader tying them together.

pub mod file_store;
pub mod loader;
pub mod memory_store;
pub mod paths;
pub mod policy;
pub mod record;
pub mod store;

pub use file_store::FileFeedStore;
pub use loader::{CurrentDate, LocalFeedLoader, SaveCompletion};
pub use memory_store::InMemoryFeedStore;
pub use policy::{FeedCachePolicy, MAX_CACHE_AGE_DAYS};
pub use record::{CacheSnapshot, LocalFeedRecord, RetrievalOutcome, to_local, to_models};
pub use store::{DeletionCompletion, FeedStore, InsertionCompletion, RetrievalCompletion};

//! feedcache: local cache for a remotely-sourced image feed.
//!
//! `cache::LocalFeedLoader` saves, loads and validates the feed over any
//! `cache::FeedStore`, serving a snapshot only while it is younger than seven
//! calendar days. `api::RemoteFeedLoader` fetches fresh items from the network.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod refresh;

pub use error::{FeedError, Result, StoreError};
pub use feed::{FeedItem, FeedLoader};

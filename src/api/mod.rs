// Feed API module.
// HTTP client abstraction, response mapping and the remote feed loader.

pub mod client;
pub mod mapper;
pub mod remote;

pub use client::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use mapper::FeedItemsMapper;
pub use remote::RemoteFeedLoader;

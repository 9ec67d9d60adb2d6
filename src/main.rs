// feedcache binary.
// Refreshes the local feed cache from the endpoint when possible and prints the feed.

use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use feedcache::api::{ReqwestHttpClient, RemoteFeedLoader};
use feedcache::cache::FileFeedStore;
use feedcache::config::Config;
use feedcache::refresh::refresh;
use feedcache::{FeedError, FeedItem, Result, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("feedcache: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init_console(&config.log_level);

    match run(config).await {
        Ok(feed) => {
            print_feed(&feed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "unable to load feed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<Vec<FeedItem>> {
    info!(store = %config.store_path.display(), "opening feed store");
    let store =
        Arc::new(FileFeedStore::new(&config.store_path).map_err(FeedError::StoreUnavailable)?);

    let remote = config.feed_url.and_then(|url| match ReqwestHttpClient::new() {
        Ok(client) => Some(RemoteFeedLoader::new(url, client)),
        Err(e) => {
            warn!(error = %e, "unable to build HTTP client, using cache");
            None
        }
    });

    refresh(store, Utc::now, remote).await
}

fn print_feed(feed: &[FeedItem]) {
    if feed.is_empty() {
        println!("No cached feed items.");
        return;
    }

    for item in feed {
        println!("{}  {}", item.id, item.url);
        if let Some(description) = &item.description {
            println!("    {}", description);
        }
        if let Some(location) = &item.location {
            println!("    @ {}", location);
        }
    }
}

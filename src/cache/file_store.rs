// File-backed feed store.
// Persists the snapshot as JSON; a single worker task runs operations in order.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::error::StoreError;

use super::record::{CacheSnapshot, LocalFeedRecord, RetrievalOutcome};
use super::store::{DeletionCompletion, FeedStore, InsertionCompletion, RetrievalCompletion};

enum Command {
    Delete(DeletionCompletion),
    Insert {
        snapshot: CacheSnapshot,
        completion: InsertionCompletion,
    },
    Retrieve(RetrievalCompletion),
    Flush(oneshot::Sender<()>),
}

impl Command {
    /// Complete without running, for when the worker has stopped.
    fn reject(self) {
        match self {
            Command::Delete(completion) => completion(Err(StoreError::Closed)),
            Command::Insert { completion, .. } => completion(Err(StoreError::Closed)),
            Command::Retrieve(completion) => {
                completion(RetrievalOutcome::Failure(StoreError::Closed))
            }
            Command::Flush(_) => {}
        }
    }
}

/// Feed store writing a single JSON document to disk.
///
/// Operations from every caller are queued to one tokio task, so they take
/// effect in submission order.
pub struct FileFeedStore {
    path: PathBuf,
    sender: mpsc::UnboundedSender<Command>,
}

impl FileFeedStore {
    /// Start the store worker on the current tokio runtime.
    /// Fails with `StoreError::NoRuntime` when called outside one.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let handle = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;
        let path = path.into();
        let (sender, receiver) = mpsc::unbounded_channel();
        handle.spawn(run_worker(path.clone(), receiver));
        Ok(Self { path, sender })
    }

    /// Wait until every operation submitted before this call has run.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.sender.send(Command::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn submit(&self, command: Command) {
        if let Err(mpsc::error::SendError(command)) = self.sender.send(command) {
            warn!(path = %self.path.display(), "feed store worker stopped");
            command.reject();
        }
    }
}

impl FeedStore for FileFeedStore {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        self.submit(Command::Delete(completion));
    }

    fn insert(
        &self,
        feed: Vec<LocalFeedRecord>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    ) {
        self.submit(Command::Insert {
            snapshot: CacheSnapshot { feed, timestamp },
            completion,
        });
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        self.submit(Command::Retrieve(completion));
    }
}

async fn run_worker(path: PathBuf, mut receiver: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = receiver.recv().await {
        match command {
            Command::Delete(completion) => completion(delete(&path).await),
            Command::Insert {
                snapshot,
                completion,
            } => completion(write(&path, &snapshot).await),
            Command::Retrieve(completion) => completion(read(&path).await),
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    debug!(path = %path.display(), "feed store worker exiting");
}

async fn read(path: &Path) -> RetrievalOutcome {
    let contents = match fs::read(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return RetrievalOutcome::Empty,
        Err(e) => return RetrievalOutcome::Failure(e.into()),
    };

    match serde_json::from_slice::<CacheSnapshot>(&contents) {
        Ok(snapshot) => RetrievalOutcome::Found(snapshot),
        Err(e) => RetrievalOutcome::Failure(e.into()),
    }
}

async fn write(path: &Path, snapshot: &CacheSnapshot) -> Result<(), StoreError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_vec(snapshot)?;

    // Write atomically via temp file
    let temp_path = temp_path(path);
    let mut file = fs::File::create(&temp_path).await?;
    file.write_all(&json).await?;
    file.sync_all().await?;
    fs::rename(&temp_path, path).await?;

    debug!(path = %path.display(), items = snapshot.feed.len(), "feed cache written");
    Ok(())
}

/// Sibling of `path` with `.tmp` appended to the full file name.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

async fn delete(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

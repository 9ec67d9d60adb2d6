// Cache path utilities.
// Resolves where the feed store lives on disk.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Name of the store document inside the cache directory.
pub const STORE_FILE_NAME: &str = "feed-store.json";

/// Get the base cache directory (~/.cache/feedcache on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "feedcache").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the default feed store file.
pub fn store_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(STORE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path() {
        // Path construction only; None when there is no home directory
        if let Some(path) = store_path() {
            assert!(path.ends_with("feed-store.json"));
            assert!(path.to_string_lossy().contains("feedcache"));
        }
    }
}

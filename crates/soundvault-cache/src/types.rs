//! Engine configuration

use std::path::PathBuf;

/// Configuration for a [`CacheStore`](crate::CacheStore).
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Directory holding the metadata database and the blob subdirectory.
    pub root_dir: PathBuf,
    /// Filename of the metadata database inside `root_dir`.
    pub db_file: String,
    /// Name of the blob subdirectory inside `root_dir`.
    pub blob_dir: String,
}

impl CacheConfig {
    /// Configuration rooted at `root_dir` with default store names.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Honors `SOUNDVAULT_CACHE_DIR` for the root directory.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("SOUNDVAULT_CACHE_DIR") {
            config.root_dir = PathBuf::from(dir);
        }
        config
    }

    /// Full path of the metadata database file.
    pub fn db_path(&self) -> PathBuf {
        self.root_dir.join(&self.db_file)
    }

    /// Full path of the blob directory.
    pub fn blob_path(&self) -> PathBuf {
        self.root_dir.join(&self.blob_dir)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("./cache/assets"),
            db_file: "cache.db".to_string(),
            blob_dir: "blobs".to_string(),
        }
    }
}

//! Filesystem operations on content-addressed blob files

use crate::error::{BlobStoreError, Result};
use crate::key::ContentKey;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// A directory of blob files, one per content key.
///
/// The store is a thin handle; it holds no open file descriptors between
/// calls and can be cloned freely.
#[derive(Debug, Clone)]
pub struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    /// Create a handle rooted at `dir`. The directory is not touched until
    /// [`ensure_dir`](Self::ensure_dir) or a write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the blob files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The on-disk path a content key maps to.
    pub fn path(&self, id: &ContentKey) -> PathBuf {
        self.dir.join(id.as_str())
    }

    /// Create the blob directory if it is missing.
    pub async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Write a payload, replacing any previous content for the same key.
    ///
    /// The file is flushed and synced before this returns, so a successful
    /// return means every byte is on disk.
    pub async fn write(&self, id: &ContentKey, data: &[u8]) -> Result<()> {
        let path = self.path(id);
        let mut file = fs::File::create(&path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        file.sync_all().await?;
        debug!(id = %id, bytes = data.len(), "wrote blob");
        Ok(())
    }

    /// Read the full payload for a key.
    pub async fn read(&self, id: &ContentKey) -> Result<Vec<u8>> {
        let path = self.path(id);
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BlobStoreError::NotFound(path)),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a blob file exists for the key.
    pub async fn exists(&self, id: &ContentKey) -> bool {
        fs::try_exists(self.path(id)).await.unwrap_or(false)
    }

    /// Delete the blob for a key. A missing file is not an error.
    pub async fn delete(&self, id: &ContentKey) -> Result<()> {
        match fs::remove_file(self.path(id)).await {
            Ok(()) => {
                debug!(id = %id, "deleted blob");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove every blob file in the directory.
    ///
    /// Entries that cannot be removed are logged and skipped so one bad file
    /// does not abort the wipe. A missing directory counts as already clear.
    pub async fn clear(&self) -> Result<()> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if let Err(e) = fs::remove_file(&path).await {
                warn!(path = %path.display(), error = %e, "failed to remove blob file");
            }
        }
        Ok(())
    }
}

//! Cache engine coordinating the metadata store and the blob file store

use crate::decoder::{MediaDecoder, DEFAULT_CONTENT_TYPE};
use crate::error::{CacheError, Result};
use crate::types::CacheConfig;
use chrono::{Duration, Utc};
use file_blob_store::{BlobStore, BlobStoreError, ContentKey};
use soundvault_db::{entries, CacheEntry, SqlitePool};
use std::path::Path;
use tracing::{debug, info, warn};

/// Disk-backed TTL cache for downloaded media payloads.
///
/// Owns both stores: an embedded SQLite database holding one expiration
/// record per content digest, and a directory of blob files named by the
/// same digest. Callers only ever supply logical keys; all coordination
/// between the two stores happens here.
pub struct CacheStore {
    pool: SqlitePool,
    blobs: BlobStore,
}

impl CacheStore {
    /// Open the cache rooted at `root_dir`, creating the directory tree and
    /// the database as needed.
    ///
    /// This is the one operation where a failure is fatal rather than a
    /// structured cache status: without its root directory the cache cannot
    /// do anything.
    pub async fn open(root_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(&CacheConfig::new(root_dir.as_ref())).await
    }

    /// Open the cache described by `config`.
    pub async fn with_config(config: &CacheConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.root_dir).await?;

        let blobs = BlobStore::new(config.blob_path());
        blobs.ensure_dir().await?;

        let pool = soundvault_db::connect(&config.db_path()).await?;
        info!(root = %config.root_dir.display(), "opened asset cache");
        Ok(Self { pool, blobs })
    }

    /// Cache `data` under `key` for `ttl`.
    ///
    /// The blob hits disk (flushed and synced) before the expiration record
    /// is written, so a crash in between leaves an orphaned file rather than
    /// a record pointing at nothing. Saving an existing key fully replaces
    /// both the payload and the expiration.
    pub async fn save(&self, key: &str, data: &[u8], ttl: Duration) -> Result<()> {
        let id = ContentKey::from_logical(key);
        let expires_at = Utc::now() + ttl;

        // The blob directory may have been deleted out from under us.
        self.blobs.ensure_dir().await?;
        self.blobs.write(&id, data).await?;
        entries::upsert(&self.pool, id.as_str(), expires_at).await?;

        debug!(id = %id, bytes = data.len(), expires_at = %expires_at, "saved cache entry");
        Ok(())
    }

    /// Load the cached bytes for `key`.
    ///
    /// Missing record → `NotFound`; record past its expiration → `Expired`
    /// (the blob is left alone); record whose blob file is gone → `NotFound`
    /// with a distinct message. Otherwise the full payload.
    pub async fn load(&self, key: &str) -> Result<Vec<u8>> {
        let id = ContentKey::from_logical(key);
        self.checked_entry(&id).await?;

        match self.blobs.read(&id).await {
            Ok(data) => {
                debug!(id = %id, bytes = data.len(), "cache hit");
                Ok(data)
            }
            Err(BlobStoreError::NotFound(path)) => {
                warn!(id = %id, "cache entry has no backing blob file");
                Err(CacheError::NotFound(format!(
                    "entry {} has no blob file at {}",
                    id,
                    path.display()
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Decode the cached payload for `key` into a playable asset.
    ///
    /// Runs the same validity checks as [`load`](Self::load), then hands the
    /// blob path to `decoder` with an `audio/mpeg` hint and awaits it. No
    /// internal lock is held across the decode, so other cache operations
    /// proceed while the decoder works.
    pub async fn download_asset<D: MediaDecoder>(&self, key: &str, decoder: &D) -> Result<D::Asset> {
        let id = ContentKey::from_logical(key);
        self.checked_entry(&id).await?;

        if !self.blobs.exists(&id).await {
            warn!(id = %id, "cache entry has no backing blob file");
            return Err(CacheError::NotFound(format!(
                "entry {} has no blob file",
                id
            )));
        }

        let path = self.blobs.path(&id);
        debug!(id = %id, path = %path.display(), "decoding cached asset");
        decoder
            .decode(&path, DEFAULT_CONTENT_TYPE)
            .await
            .map_err(CacheError::Unknown)
    }

    /// Remove every expired entry: the blob file first (best-effort), then
    /// its metadata row.
    ///
    /// The whole sweep compares against a single clock sample. A blob that
    /// cannot be deleted is logged and skipped so one bad file never aborts
    /// the sweep; its row is removed regardless, which at worst leaves an
    /// orphaned file for the next sweep of the directory.
    pub async fn delete_expired(&self) -> Result<()> {
        let now = Utc::now();
        let expired = entries::list_expired(&self.pool, now).await?;
        if expired.is_empty() {
            return Ok(());
        }
        info!(count = expired.len(), "sweeping expired cache entries");

        for entry in &expired {
            let id = ContentKey::from_digest(entry.id.as_str());
            if let Err(e) = self.blobs.delete(&id).await {
                warn!(id = %entry.id, error = %e, "failed to delete expired blob");
            }
            entries::delete(&self.pool, &entry.id).await?;
        }
        Ok(())
    }

    /// Wipe the cache: every metadata row and every blob file.
    ///
    /// Safe to call repeatedly; wiping an empty cache is a no-op and the
    /// store stays queryable afterwards.
    pub async fn delete_all(&self) -> Result<()> {
        entries::clear(&self.pool).await?;
        self.blobs.clear().await?;
        info!("cleared asset cache");
        Ok(())
    }

    /// Fetch the metadata record for `id` and verify it against one clock
    /// sample, so a record cannot expire between the checks of a single
    /// operation.
    async fn checked_entry(&self, id: &ContentKey) -> Result<CacheEntry> {
        let now = Utc::now();
        let Some(entry) = entries::get(&self.pool, id.as_str()).await? else {
            return Err(CacheError::NotFound(format!("no entry for digest {}", id)));
        };
        if entry.is_expired(now) {
            debug!(id = %id, expires_at = %entry.expires_at, "cache entry expired");
            return Err(CacheError::Expired);
        }
        Ok(entry)
    }
}

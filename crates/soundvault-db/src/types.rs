//! Row types for the metadata store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Expiration record for one cached payload.
///
/// `id` is the content digest of the logical key and matches the blob
/// filename in the file store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CacheEntry {
    pub id: String,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Whether the record has expired as of `now`.
    ///
    /// Strict `<` comparison: a zero-TTL save puts the expiration at save
    /// time, which any later clock sample treats as stale.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

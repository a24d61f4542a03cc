//! Error types for the asset cache engine

use file_blob_store::BlobStoreError;
use std::fmt;

/// Failure classes surfaced by cache operations.
///
/// Every failure is returned as a value; the engine never panics on a miss
/// or a downstream fault, and it does not retry.
#[derive(Debug)]
pub enum CacheError {
    /// No usable entry: either no metadata record exists for the key, or the
    /// record's backing blob file is gone. The message distinguishes the two.
    NotFound(String),
    /// A metadata record exists but its expiration has passed. The blob is
    /// left untouched.
    Expired,
    /// Downstream failure (decoder rejection, unexpected I/O or database
    /// fault) with the underlying detail text.
    Unknown(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::NotFound(msg) => write!(f, "cache entry not found: {}", msg),
            CacheError::Expired => write!(f, "cache entry is expired"),
            CacheError::Unknown(msg) => write!(f, "unknown error: {}", msg),
        }
    }
}

impl std::error::Error for CacheError {}

impl From<sqlx::Error> for CacheError {
    fn from(err: sqlx::Error) -> Self {
        CacheError::Unknown(err.to_string())
    }
}

impl From<std::io::Error> for CacheError {
    fn from(err: std::io::Error) -> Self {
        CacheError::Unknown(err.to_string())
    }
}

impl From<BlobStoreError> for CacheError {
    fn from(err: BlobStoreError) -> Self {
        match err {
            BlobStoreError::NotFound(path) => {
                CacheError::NotFound(format!("no blob file at {}", path.display()))
            }
            other => CacheError::Unknown(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;

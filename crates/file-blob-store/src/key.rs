//! Deterministic content keys

use sha2::{Digest, Sha256};
use std::fmt;

/// Identifier derived from a logical cache key.
///
/// Holds the lowercase SHA-256 hex digest of the logical key string. The
/// digest is used verbatim as the blob filename and as the metadata primary
/// key, so it is part of the durable on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey(String);

impl ContentKey {
    /// Derive the content key for a logical key.
    pub fn from_logical(key: &str) -> Self {
        let digest = Sha256::digest(key.as_bytes());
        Self(hex::encode(digest))
    }

    /// Rehydrate a content key from a digest string previously produced by
    /// [`from_logical`](Self::from_logical) and stored in the metadata
    /// record.
    pub fn from_digest(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// The digest as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

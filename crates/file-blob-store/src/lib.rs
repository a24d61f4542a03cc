//! Content-addressed file store for cached binary payloads
//!
//! Stores raw byte payloads on disk, one file per content key. The key is a
//! deterministic digest of the caller's logical key and doubles as the
//! filename, so the on-disk layout is stable across runs.

mod error;
mod key;
mod store;

pub use error::{BlobStoreError, Result};
pub use key::ContentKey;
pub use store::BlobStore;

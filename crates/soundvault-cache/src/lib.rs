//! Soundvault asset cache
//!
//! Persistent, disk-backed TTL cache for downloaded media payloads, keyed by
//! an arbitrary string (typically the source URL). Pairs an embedded SQLite
//! metadata store with a directory of content-addressed blob files; all
//! access goes through [`CacheStore`], which keeps the two consistent.

pub mod decoder;
pub mod error;
pub mod store;
pub mod types;

pub use decoder::{MediaDecoder, DEFAULT_CONTENT_TYPE};
pub use error::{CacheError, Result};
pub use store::CacheStore;
pub use types::CacheConfig;

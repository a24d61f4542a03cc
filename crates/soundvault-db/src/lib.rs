//! Embedded metadata store for the Soundvault asset cache
//!
//! One SQLite table of expiration records, one row per content digest. All
//! query functions take an executor so they compose with both pools and
//! transactions.

pub mod entries;
pub mod migrate;
pub mod pool;
pub mod types;

pub use pool::connect;
pub use sqlx::sqlite::SqlitePool;
pub use types::CacheEntry;

//! SQLite pool construction

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Open (or create) the metadata database at `path` and run migrations.
///
/// WAL journal mode allows concurrent readers alongside the single writer;
/// the busy timeout covers short write contention instead of surfacing
/// SQLITE_BUSY to callers.
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePool::connect_with(options).await?;
    info!(path = %path.display(), "opened metadata database");

    crate::migrate::migrate(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("cache.db");

        let _pool = connect(&db_path).await.unwrap();
        assert!(db_path.is_file());
    }

    #[tokio::test]
    async fn test_connect_is_reopenable() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("cache.db");

        let pool = connect(&db_path).await.unwrap();
        crate::entries::upsert(&pool, "digest-a", chrono::Utc::now())
            .await
            .unwrap();
        pool.close().await;

        let pool = connect(&db_path).await.unwrap();
        let entry = crate::entries::get(&pool, "digest-a").await.unwrap();
        assert!(entry.is_some());
    }
}

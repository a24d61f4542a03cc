// Cache entry queries (digest-keyed, expiration-indexed)

use crate::types::CacheEntry;
use chrono::{DateTime, Utc};

/// Insert or fully replace the record for a digest.
pub async fn upsert(
    executor: impl sqlx::SqliteExecutor<'_>,
    id: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO cache_entries (id, expires_at)
        VALUES ($1, $2)
        ON CONFLICT (id) DO UPDATE SET expires_at = $2
        "#,
    )
    .bind(id)
    .bind(expires_at)
    .execute(executor)
    .await?;
    Ok(())
}

/// Get the record for a digest.
pub async fn get(
    executor: impl sqlx::SqliteExecutor<'_>,
    id: &str,
) -> Result<Option<CacheEntry>, sqlx::Error> {
    sqlx::query_as("SELECT id, expires_at FROM cache_entries WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// All records that expired strictly before `before`, oldest first.
///
/// Fully buffered; the sweep works off a snapshot rather than holding a
/// cursor open across file deletions.
pub async fn list_expired(
    executor: impl sqlx::SqliteExecutor<'_>,
    before: DateTime<Utc>,
) -> Result<Vec<CacheEntry>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, expires_at FROM cache_entries WHERE expires_at < $1 ORDER BY expires_at",
    )
    .bind(before)
    .fetch_all(executor)
    .await
}

/// Delete the record for a digest.
pub async fn delete(
    executor: impl sqlx::SqliteExecutor<'_>,
    id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM cache_entries WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Remove every record.
pub async fn clear(executor: impl sqlx::SqliteExecutor<'_>) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM cache_entries")
        .execute(executor)
        .await?;
    Ok(())
}

/// Number of records, for diagnostics and tests.
pub async fn count(executor: impl sqlx::SqliteExecutor<'_>) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cache_entries")
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}

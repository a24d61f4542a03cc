use sqlx::SqlitePool;
use tracing::info;

/// Run all database migrations (versioned, tracked in `_sqlx_migrations` table)
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running cache metadata migrations...");
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Protocol(e.to_string()))?;
    info!("Cache metadata migrations completed");
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

const CREATE_MESSAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    role      TEXT NOT NULL,
    content   TEXT NOT NULL,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Opens a SQLite connection pool, creating the database file if it does not exist.
pub async fn create_pool(database_path: &Path) -> Result<SqlitePool> {
    info!("Opening SQLite database at {}", database_path.display());

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open database {}", database_path.display()))?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Ensures the `messages` table exists. Safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_MESSAGES_TABLE)
        .execute(pool)
        .await
        .context("Failed to create messages table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'messages'",
        )
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&dir.path().join("chat.db")).await.unwrap();

        init_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO messages (role, content) VALUES ('user', 'hello')")
            .execute(&pool)
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();

        assert_eq!(table_count(&pool).await, 1);
        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.db");

        let pool = create_pool(&path).await.unwrap();
        init_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO messages (role, content) VALUES ('assistant', 'kept')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let reopened = create_pool(&path).await.unwrap();
        init_schema(&reopened).await.unwrap();
        let content: String = sqlx::query_scalar("SELECT content FROM messages")
            .fetch_one(&reopened)
            .await
            .unwrap();
        assert_eq!(content, "kept");
    }

    #[tokio::test]
    async fn test_timestamp_defaults_to_insert_time() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&dir.path().join("chat.db")).await.unwrap();
        init_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO messages (role, content) VALUES ('user', 'x')")
            .execute(&pool)
            .await
            .unwrap();
        let missing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE timestamp IS NULL")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(missing, 0);
    }
}

//! Chat history persistence. The `messages` table is append-only:
//! these are the only statements that touch it.

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::models::message::{MessageRow, Role};

/// Number of messages returned when the caller does not choose a limit.
pub const DEFAULT_HISTORY_LIMIT: i64 = 20;

/// Appends a single message. The timestamp is assigned by SQLite.
pub async fn save_message<'e, E>(executor: E, role: Role, content: &str) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO messages (role, content) VALUES (?, ?)")
        .bind(role.as_str())
        .bind(content)
        .execute(executor)
        .await?;
    Ok(())
}

/// Appends the user message and then the assistant reply as one unit.
/// Either both rows are written or neither is.
pub async fn record_exchange(
    pool: &SqlitePool,
    user_message: &str,
    reply: &str,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    save_message(&mut *tx, Role::User, user_message).await?;
    save_message(&mut *tx, Role::Assistant, reply).await?;
    tx.commit().await
}

/// Returns the newest `limit` messages, oldest first.
pub async fn get_recent_messages(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<MessageRow>, sqlx::Error> {
    let mut rows = sqlx::query_as::<_, MessageRow>(
        "SELECT id, role, content, timestamp FROM messages ORDER BY id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.reverse();
    Ok(rows)
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Author of a stored chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One row of the `messages` table. Rows are never updated or deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MessageRow {
    #[serde(skip_serializing)]
    pub id: i64,
    pub role: Role,
    pub content: String,
    /// Assigned by SQLite (`CURRENT_TIMESTAMP`, UTC).
    pub timestamp: NaiveDateTime,
}

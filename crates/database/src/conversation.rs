//! Guest conversation log.

use sqlx::SqlitePool;

use crate::models::{Conversation, NewConversation};
use crate::Result;

/// Append one inbound/reply exchange and return its ID.
pub async fn append_conversation(pool: &SqlitePool, entry: &NewConversation) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO conversations (sender, inbound_text, reply_text, language, delivered)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&entry.sender)
    .bind(&entry.inbound_text)
    .bind(&entry.reply_text)
    .bind(&entry.language)
    .bind(entry.delivered)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List exchanges with a sender, oldest first.
pub async fn list_conversations(pool: &SqlitePool, sender: &str) -> Result<Vec<Conversation>> {
    let rows = sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, sender, inbound_text, reply_text, language, delivered, created_at
        FROM conversations
        WHERE sender = ?
        ORDER BY id
        "#,
    )
    .bind(sender)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

//! Dispatch outcome records.

use sqlx::SqlitePool;

use crate::models::{HotelMessageStats, MessageFilter, NewSentMessage, SentMessage};
use crate::Result;

/// Append one outcome record and return its ID.
pub async fn append_sent_message(pool: &SqlitePool, message: &NewSentMessage) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO messages_sent (hotel_id, room_id, sent_date, template_name, status, content)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(message.hotel_id)
    .bind(message.room_id)
    .bind(&message.sent_date)
    .bind(&message.template_name)
    .bind(&message.status)
    .bind(&message.content)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List outcome records matching `filter`, newest date first.
pub async fn list_sent_messages(
    pool: &SqlitePool,
    filter: &MessageFilter,
) -> Result<Vec<SentMessage>> {
    let rows = sqlx::query_as::<_, SentMessage>(
        r#"
        SELECT id, hotel_id, room_id, sent_date, template_name, status, content, created_at
        FROM messages_sent
        WHERE (?1 IS NULL OR hotel_id = ?1)
          AND (?2 IS NULL OR room_id = ?2)
          AND (?3 IS NULL OR sent_date >= ?3)
          AND (?4 IS NULL OR sent_date <= ?4)
        ORDER BY sent_date DESC, id DESC
        "#,
    )
    .bind(filter.hotel_id)
    .bind(filter.room_id)
    .bind(&filter.start_date)
    .bind(&filter.end_date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count outcome records per hotel. `room_id` in the filter is ignored.
pub async fn message_stats(
    pool: &SqlitePool,
    filter: &MessageFilter,
) -> Result<Vec<HotelMessageStats>> {
    let rows = sqlx::query_as::<_, HotelMessageStats>(
        r#"
        SELECT m.hotel_id AS hotel_id,
               h.name AS hotel_name,
               COUNT(*) AS total,
               SUM(CASE WHEN m.status = 'sent' THEN 1 ELSE 0 END) AS sent
        FROM messages_sent m
        LEFT JOIN hotels h ON h.id = m.hotel_id
        WHERE (?1 IS NULL OR m.hotel_id = ?1)
          AND (?2 IS NULL OR m.sent_date >= ?2)
          AND (?3 IS NULL OR m.sent_date <= ?3)
        GROUP BY m.hotel_id
        ORDER BY m.hotel_id
        "#,
    )
    .bind(filter.hotel_id)
    .bind(&filter.start_date)
    .bind(&filter.end_date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

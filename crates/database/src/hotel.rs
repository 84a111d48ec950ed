//! Hotel and room persistence.
//!
//! Rooms are managed by the administrative side; the dispatcher only reads
//! them. The create functions exist for seeding and tests.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Hotel, NewRoom, Room};

/// Insert a hotel and return its ID.
pub async fn create_hotel(pool: &SqlitePool, name: &str, phone: Option<&str>) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO hotels (name, phone)
        VALUES (?, ?)
        "#,
    )
    .bind(name)
    .bind(phone)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a hotel by ID.
pub async fn get_hotel(pool: &SqlitePool, id: i64) -> Result<Hotel> {
    sqlx::query_as::<_, Hotel>(
        r#"
        SELECT id, name, phone
        FROM hotels
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Hotel",
        id: id.to_string(),
    })
}

/// Insert a room and return its ID.
pub async fn create_room(pool: &SqlitePool, room: &NewRoom) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO rooms (hotel_id, name, calendar_url, contact_number, template_name)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(room.hotel_id)
    .bind(&room.name)
    .bind(&room.calendar_url)
    .bind(&room.contact_number)
    .bind(&room.template_name)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a room by ID.
pub async fn get_room(pool: &SqlitePool, id: i64) -> Result<Room> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT id, hotel_id, name, calendar_url, contact_number, template_name
        FROM rooms
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Room",
        id: id.to_string(),
    })
}

/// List all rooms in ID order.
pub async fn list_rooms(pool: &SqlitePool) -> Result<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT id, hotel_id, name, calendar_url, contact_number, template_name
        FROM rooms
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

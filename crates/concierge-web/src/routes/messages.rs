//! Sent message log queries.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use database::{sent_message, MessageFilter, SentMessage};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WebError};
use crate::state::AppState;

/// Label for stats rows whose hotel no longer exists.
const UNKNOWN_HOTEL_LABEL: &str = "(unknown)";

/// Query parameters for the message log.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub hotel_id: Option<i64>,
    pub room_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Per-hotel message counts.
#[derive(Debug, Serialize)]
pub struct HotelStats {
    pub hotel_id: i64,
    pub hotel_name: String,
    pub total: i64,
    pub sent: i64,
}

impl MessageQuery {
    fn into_filter(self) -> Result<MessageFilter> {
        Ok(MessageFilter {
            hotel_id: self.hotel_id,
            room_id: self.room_id,
            start_date: parse_date(self.start_date, "start_date")?,
            end_date: parse_date(self.end_date, "end_date")?,
        })
    }
}

/// Accept blank or YYYY-MM-DD.
fn parse_date(value: Option<String>, field: &str) -> Result<Option<String>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| Some(d.format("%Y-%m-%d").to_string()))
            .map_err(|_| WebError::BadRequest(format!("{} must be YYYY-MM-DD", field))),
    }
}

/// List dispatch records, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> Result<Json<Vec<SentMessage>>> {
    let filter = query.into_filter()?;
    let rows = sent_message::list_sent_messages(state.db.pool(), &filter).await?;
    Ok(Json(rows))
}

/// Message counts per hotel.
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> Result<Json<Vec<HotelStats>>> {
    let filter = query.into_filter()?;
    let rows = sent_message::message_stats(state.db.pool(), &filter).await?;

    let stats = rows
        .into_iter()
        .map(|row| HotelStats {
            hotel_id: row.hotel_id,
            hotel_name: row
                .hotel_name
                .unwrap_or_else(|| UNKNOWN_HOTEL_LABEL.to_string()),
            total: row.total,
            sent: row.sent,
        })
        .collect();

    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(None, "start_date").unwrap(), None);
        assert_eq!(parse_date(Some(" ".to_string()), "start_date").unwrap(), None);
        assert_eq!(
            parse_date(Some("2025-06-15".to_string()), "start_date").unwrap(),
            Some("2025-06-15".to_string())
        );
        assert!(matches!(
            parse_date(Some("15/06/2025".to_string()), "end_date"),
            Err(WebError::BadRequest(msg)) if msg.contains("end_date")
        ));
    }
}

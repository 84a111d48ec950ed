//! Route handlers.

pub mod dispatch;
pub mod health;
pub mod messages;
pub mod reply;
pub mod webhook;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Dispatch triggers
        .route("/messages/search-and-send", post(dispatch::search_and_send))
        .route("/messages/manual", post(dispatch::manual))
        // Message log
        .route("/messages", get(messages::list))
        .route("/messages/stats", get(messages::stats))
        // WhatsApp webhook
        .route("/webhook", get(webhook::verify).post(webhook::receive))
        // Diagnostics
        .route("/test-ai-response", post(reply::test_ai_response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use database::{hotel, models::NewRoom, sent_message, Database, NewSentMessage};
    use dispatcher::{DispatchConfig, Dispatcher, SqliteStore, DEFAULT_HOTEL_PHONE};
    use reply_brain::{ReplyBrain, ReplyBrainConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use whatsapp_cloud::{WhatsAppClient, WhatsAppConfig};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn test_state() -> AppState {
        test_state_with("http://127.0.0.1:9").await
    }

    async fn test_state_with(whatsapp_url: &str) -> AppState {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();

        let whatsapp = WhatsAppClient::new(
            WhatsAppConfig::new("1055", "test-token").with_api_url(whatsapp_url),
        )
        .unwrap();
        let brain = ReplyBrain::new(ReplyBrainConfig::default()).unwrap();
        let dispatcher = Dispatcher::new(
            Arc::new(SqliteStore::new(db.clone())),
            Arc::new(whatsapp),
            Arc::new(brain),
            DispatchConfig::default(),
        )
        .unwrap();

        AppState::new(db, dispatcher, Some("hook-secret".to_string()))
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router()
            .with_state(state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(state, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(state: &AppState, uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let (status, body) = send(state, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state().await;
        let (status, body) = get_json(&state, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_search_and_send_reports_and_records() {
        let state = test_state().await;
        let hotel_id = hotel::create_hotel(state.db.pool(), "Oberth", None)
            .await
            .unwrap();
        hotel::create_room(
            state.db.pool(),
            &NewRoom {
                hotel_id,
                name: "Camera 1".to_string(),
                calendar_url: Some("not a url".to_string()),
                contact_number: None,
                template_name: "oberth".to_string(),
            },
        )
        .await
        .unwrap();

        let (status, body) = post_json(&state, "/messages/search-and-send", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], 0);
        assert_eq!(body["sent"], 0);
        assert_eq!(body["details"].as_array().unwrap().len(), 1);
        assert_eq!(body["details"][0]["status"], "invalid_feed");
        assert_eq!(body["details"][0]["hotel"], "Oberth");

        let (status, rows) = get_json(&state, &format!("/messages?hotel_id={}", hotel_id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rows.as_array().unwrap().len(), 1);
        assert_eq!(rows[0]["status"], "invalid_feed");
    }

    #[tokio::test]
    async fn test_manual_sends_template_for_todays_guest() {
        let server = MockServer::start().await;
        let today = chrono::Utc::now().date_naive().format("%Y%m%d");
        let feed = format!(
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nDTSTART;VALUE=DATE:{}\r\n\
             SUMMARY:CLOSED - [3003] Ana Pop\r\n\
             DESCRIPTION:Phone: 0722 111 222\\nFirst Name: Ana\r\n\
             END:VEVENT\r\nEND:VCALENDAR\r\n",
            today
        );
        Mock::given(method("GET"))
            .and(path("/cal/1.ics"))
            .respond_with(ResponseTemplate::new(200).set_body_string(feed))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v19.0/1055/messages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "messages": [{ "id": "wamid.HBg" }] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let state = test_state_with(&server.uri()).await;
        let hotel_id = hotel::create_hotel(state.db.pool(), "Oberth", None)
            .await
            .unwrap();
        let room_id = hotel::create_room(
            state.db.pool(),
            &NewRoom {
                hotel_id,
                name: "Camera 1".to_string(),
                calendar_url: Some(format!("{}/cal/1.ics", server.uri())),
                contact_number: None,
                template_name: "oberth".to_string(),
            },
        )
        .await
        .unwrap();

        let (status, body) = post_json(
            &state,
            "/messages/manual",
            json!({ "room_id": room_id, "template_name": "welcome_v2" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "sent");
        assert_eq!(body["guest"], "Ana Pop");
        assert_eq!(body["phone"], "+40722111222");

        let (_, rows) = get_json(&state, "/messages").await;
        assert_eq!(rows[0]["template_name"], "welcome_v2");
        assert_eq!(rows[0]["status"], "sent");
    }

    #[tokio::test]
    async fn test_stats_label_missing_hotel() {
        let state = test_state().await;
        let hotel_id = hotel::create_hotel(state.db.pool(), "Oberth", None)
            .await
            .unwrap();

        for (hotel, status) in [(hotel_id, "sent"), (hotel_id, "not_found"), (99, "sent")] {
            sent_message::append_sent_message(
                state.db.pool(),
                &NewSentMessage {
                    hotel_id: hotel,
                    room_id: 1,
                    sent_date: "2025-06-15".to_string(),
                    template_name: "oberth".to_string(),
                    status: status.to_string(),
                    content: String::new(),
                },
            )
            .await
            .unwrap();
        }

        let (status, body) = get_json(&state, "/messages/stats?start_date=2025-06-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "hotel_id": hotel_id, "hotel_name": "Oberth", "total": 2, "sent": 1 },
                { "hotel_id": 99, "hotel_name": "(unknown)", "total": 1, "sent": 1 }
            ])
        );

        let (status, body) = get_json(&state, "/messages?start_date=June").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("start_date"));
    }

    #[tokio::test]
    async fn test_manual_unknown_room_is_404() {
        let state = test_state().await;
        let (status, body) = post_json(&state, "/messages/manual", json!({ "room_id": 42 })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("42"));
    }

    #[tokio::test]
    async fn test_webhook_verification() {
        let state = test_state().await;

        let request = Request::builder()
            .uri("/webhook?hub.mode=subscribe&hub.verify_token=hook-secret&hub.challenge=1158201444")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"1158201444");

        let request = Request::builder()
            .uri("/webhook?hub.mode=subscribe&hub.verify_token=wrong&hub.challenge=1")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&state, request).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_webhook_ignores_status_updates() {
        let state = test_state().await;
        let payload = json!({
            "object": "whatsapp_business_account",
            "entry": [{ "id": "1", "changes": [{ "field": "messages", "value": {
                "statuses": [{ "id": "wamid.1", "status": "read" }]
            } }] }]
        });

        let (status, body) = post_json(&state, "/webhook", payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "received": 0 }));
    }

    #[tokio::test]
    async fn test_ai_response_preview() {
        let state = test_state().await;
        let (status, body) = post_json(
            &state,
            "/test-ai-response",
            json!({
                "message": "Guten Tag, wann können wir morgen Nachmittag im Hotel einchecken?",
                "guest_name": "Jonas"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["detected_language"], "de");
        let reply = body["reply"].as_str().unwrap();
        assert!(reply.starts_with("Hallo Jonas!"));
        assert!(reply.contains(DEFAULT_HOTEL_PHONE));
    }
}

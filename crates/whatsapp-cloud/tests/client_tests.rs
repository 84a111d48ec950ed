//! Integration tests for the WhatsApp client against a mock API.

use std::time::Duration;

use serde_json::json;
use whatsapp_cloud::{HeaderParameter, WhatsAppClient, WhatsAppConfig, WhatsAppError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WhatsAppClient {
    let config = WhatsAppConfig::new("1055", "test-token").with_api_url(server.uri());
    WhatsAppClient::new(config).unwrap()
}

#[tokio::test]
async fn test_send_template_posts_expected_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v19.0/1055/messages"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "+40722111222",
            "type": "template",
            "template": {
                "name": "oberth",
                "language": { "code": "ro" },
                "components": [
                    { "type": "header", "parameters": [{ "type": "text", "text": "Ana" }] },
                    { "type": "body", "parameters": [] }
                ]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messaging_product": "whatsapp",
            "messages": [{ "id": "wamid.HBg" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send_template("+40722111222", "oberth", "ro", Some(HeaderParameter::text("Ana")))
        .await
        .unwrap();

    assert_eq!(result.message_id.as_deref(), Some("wamid.HBg"));
}

#[tokio::test]
async fn test_rejection_keeps_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v19.0/1055/messages"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":{"message":"Template name does not exist"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_template("+40722111222", "missing", "ro", None)
        .await
        .unwrap_err();

    match err {
        WhatsAppError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("Template name does not exist"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_send_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v19.0/1055/messages"))
        .and(body_json(json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "40722111222",
            "type": "text",
            "text": { "body": "Buna ziua!" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send_text("40722111222", "Buna ziua!")
        .await
        .unwrap();
    assert!(result.message_id.is_none());
}

#[tokio::test]
async fn test_timeout_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = WhatsAppConfig::new("1055", "test-token")
        .with_api_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = WhatsAppClient::new(config).unwrap();

    let err = client.send_text("40722111222", "hi").await.unwrap_err();
    assert!(matches!(err, WhatsAppError::Http(_)));
}

#[test]
fn test_missing_credentials_rejected_up_front() {
    let err = WhatsAppClient::new(WhatsAppConfig::new("1055", "")).err().unwrap();
    assert!(matches!(err, WhatsAppError::Config(_)));
}

//! Mock Telegram Bot API server for testing
//!
//! This module provides a mock HTTP server that simulates the
//! `sendMessage` endpoint of the Telegram Bot API using wiremock, with
//! configurable success, failure and malformed responses.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bot token used by all test settings
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Moderation chat id used by all test settings
pub fn test_admin_chat_id() -> String {
    "-1001234567890".to_string()
}

/// Mock Telegram Bot API server
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    /// Start a new mock server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to plug into `telegram.api_url`
    pub fn api_url(&self) -> String {
        self.server.uri()
    }

    fn send_message_path() -> String {
        format!("/bot{}/sendMessage", test_bot_token())
    }

    /// sendMessage succeeds and returns the given message id
    pub async fn mock_send_message_success(&self, message_id: i64) {
        let body = json!({
            "ok": true,
            "result": {
                "message_id": message_id,
                "date": 1640995200,
                "text": "Test message"
            }
        });

        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// sendMessage succeeds at the HTTP level but omits the result record
    pub async fn mock_send_message_without_result(&self) {
        let body = json!({ "ok": true });

        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// sendMessage is rejected by the Bot API
    pub async fn mock_send_message_failure(&self) {
        let body = json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        });

        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(400).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// sendMessage answers with a body that is not a Bot API envelope
    pub async fn mock_send_message_garbage(&self) {
        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of all sendMessage requests received so far
    pub async fn received_payloads(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().ends_with("/sendMessage"))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }
}

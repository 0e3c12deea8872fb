//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot whose requests go to this server
    pub fn bot(&self) -> Bot {
        Bot::new(test_bot_token()).set_api_url(self.server.uri().parse().expect("mock server uri"))
    }

    /// Method names are matched case-insensitively; teloxide sends `SendMessage`
    fn endpoint(name: &str) -> String {
        format!(r"(?i)^/bot[^/]+/{}$", name)
    }

    async fn mount(&self, endpoint: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path_regex(Self::endpoint(endpoint)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self) {
        self.mount("sendMessage", json!({ "ok": true, "result": bot_message(false) })).await;
    }

    /// Setup mock for editMessageText endpoint
    pub async fn mock_edit_message_text(&self) {
        self.mount("editMessageText", json!({ "ok": true, "result": bot_message(true) })).await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self) {
        self.mount("answerCallbackQuery", json!({ "ok": true, "result": true })).await;
    }

    /// Setup all endpoints the bot uses
    pub async fn setup_default_mocks(&self) {
        self.mock_send_message().await;
        self.mock_edit_message_text().await;
        self.mock_answer_callback_query().await;
    }

    /// JSON bodies of every request sent to the given method
    pub async fn requests_to(&self, endpoint: &str) -> Vec<Value> {
        let received = self.server.received_requests().await.unwrap_or_default();
        received
            .iter()
            .filter(|req| {
                req.url
                    .path()
                    .rsplit('/')
                    .next()
                    .is_some_and(|name| name.eq_ignore_ascii_case(endpoint))
            })
            .map(|req| serde_json::from_slice(&req.body).unwrap_or(Value::Null))
            .collect()
    }

    /// Text of every message sent or edited, in request order
    pub async fn texts_to(&self, endpoint: &str) -> Vec<String> {
        self.requests_to(endpoint)
            .await
            .iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }
}

fn bot_message(edited: bool) -> Value {
    let mut message = json!({
        "message_id": 123,
        "from": {
            "id": 12345,
            "is_bot": true,
            "first_name": "TestBot",
            "username": "test_bot"
        },
        "chat": {
            "id": test_user_id(),
            "first_name": "Tester",
            "type": "private"
        },
        "date": 1640995200,
        "text": "Test message"
    });
    if edited {
        message["edit_date"] = json!(1640995260);
    }
    message
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}

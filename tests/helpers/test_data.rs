//! Test data helpers
//!
//! Content fixtures plus Telegram messages and callback queries built from
//! the same JSON the Bot API delivers.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde_json::json;
use teloxide::types::{CallbackQuery, Message};
use FuriaBot::{AppContext, ContentDocument, Settings};
use super::{test_bot_token, test_user_id};

/// Content file with one entry per section and the single quiz question
/// `{prompt: "Q1", options: ["A", "B", "C"], correct: 1}`
pub const SAMPLE_CONTENT: &str = include_str!("../fixtures/team_content.json");

/// Write a content file into `dir` and return its path
pub fn write_content(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("team_content.json");
    std::fs::write(&path, contents).expect("write content fixture");
    path
}

pub fn sample_document() -> ContentDocument {
    ContentDocument::from_json(SAMPLE_CONTENT).expect("sample content parses")
}

pub fn context_with(content: ContentDocument) -> Arc<AppContext> {
    let mut settings = Settings::default();
    settings.bot.token = test_bot_token();
    Arc::new(AppContext::new(settings, content))
}

/// A private-chat text message from the test user
pub fn private_text_message(text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 1,
        "date": 1640995200,
        "chat": {
            "id": test_user_id(),
            "first_name": "Tester",
            "type": "private"
        },
        "from": {
            "id": test_user_id(),
            "is_bot": false,
            "first_name": "Tester"
        },
        "text": text
    }))
    .expect("valid message json")
}

/// A button press by the test user on the bot's message 123
pub fn quiz_callback(data: &str) -> CallbackQuery {
    let mut query = callback_json();
    query["data"] = json!(data);
    serde_json::from_value(query).expect("valid callback query json")
}

/// A button press that carries no callback data
pub fn callback_without_data() -> CallbackQuery {
    serde_json::from_value(callback_json()).expect("valid callback query json")
}

fn callback_json() -> serde_json::Value {
    json!({
        "id": "4382bfdwdsb323b2d9",
        "from": {
            "id": test_user_id(),
            "is_bot": false,
            "first_name": "Tester"
        },
        "message": {
            "message_id": 123,
            "date": 1640995200,
            "chat": {
                "id": test_user_id(),
                "first_name": "Tester",
                "type": "private"
            },
            "text": "❓ FURIA Quiz:\n\nQ1"
        },
        "chat_instance": "-123456789"
    })
}

//! Handlers talking to a mocked Bot API

mod helpers;

use helpers::*;
use serial_test::serial;
use FuriaBot::handlers::callbacks::quiz::{ANSWER_ERROR, CORRECT, EXPIRED};
use FuriaBot::handlers::messages::UNRECOGNIZED;
use FuriaBot::handlers::{handle_callback_query, handle_message, send_reply, Reply};
use teloxide::types::ChatId;

#[tokio::test]
#[serial]
async fn test_send_reply_posts_text() {
    let mock = TelegramMockServer::new().await;
    mock.mock_send_message().await;

    send_reply(&mock.bot(), ChatId(test_user_id()), &Reply::text("hello"))
        .await
        .expect("send succeeds");

    let bodies = mock.requests_to("sendMessage").await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["text"], "hello");
    assert_eq!(bodies[0]["chat_id"], test_user_id());
}

#[tokio::test]
#[serial]
async fn test_menu_message_round_trip() {
    let mock = TelegramMockServer::new().await;
    mock.setup_default_mocks().await;
    let ctx = context_with(sample_document());

    handle_message(mock.bot(), private_text_message("Roster"), ctx.clone()).await.unwrap();
    handle_message(mock.bot(), private_text_message("roster"), ctx).await.unwrap();

    let texts = mock.texts_to("sendMessage").await;
    assert_eq!(texts.len(), 2);
    assert!(texts[0].contains("🔹 KSCERATO 🇧🇷"));
    assert_eq!(texts[1], UNRECOGNIZED);
}

#[tokio::test]
#[serial]
async fn test_quiz_buttons_and_answer_edit() {
    let mock = TelegramMockServer::new().await;
    mock.setup_default_mocks().await;
    let ctx = context_with(sample_document());

    handle_message(mock.bot(), private_text_message("Quiz"), ctx.clone()).await.unwrap();

    let sent = mock.requests_to("sendMessage").await;
    let buttons = sent[0]["reply_markup"]["inline_keyboard"].as_array().unwrap();
    assert_eq!(buttons.len(), 3);
    let correct_data = buttons[1][0]["callback_data"].as_str().unwrap().to_string();

    handle_callback_query(mock.bot(), quiz_callback(&correct_data), ctx.clone()).await.unwrap();
    handle_callback_query(mock.bot(), quiz_callback(&correct_data), ctx).await.unwrap();

    assert_eq!(mock.requests_to("answerCallbackQuery").await.len(), 2);
    let edits = mock.texts_to("editMessageText").await;
    assert_eq!(edits, vec![CORRECT.to_string(), EXPIRED.to_string()]);
}

#[tokio::test]
#[serial]
async fn test_callback_without_data_closes_quiz() {
    let mock = TelegramMockServer::new().await;
    mock.setup_default_mocks().await;
    let ctx = context_with(sample_document());

    handle_message(mock.bot(), private_text_message("Quiz"), ctx.clone()).await.unwrap();
    assert_eq!(ctx.quiz.store().active_sessions().await, 1);

    handle_callback_query(mock.bot(), callback_without_data(), ctx.clone()).await.unwrap();

    assert!(ctx.quiz.store().load(test_user_id()).await.is_none());
    assert_eq!(mock.requests_to("answerCallbackQuery").await.len(), 1);
    assert_eq!(mock.texts_to("editMessageText").await, vec![ANSWER_ERROR.to_string()]);
}

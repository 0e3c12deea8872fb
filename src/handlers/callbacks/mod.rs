//! Callback query handlers module
//!
//! This module contains handlers for inline keyboard button callbacks

pub mod quiz;

use std::sync::Arc;
use teloxide::{Bot, types::{CallbackQuery, ChatId}, prelude::*};
use tracing::{debug, warn};
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;
use crate::state::AppContext;
use crate::handlers::reply::{edit_reply, send_reply};

/// Main callback query dispatcher
///
/// Quiz options are the only inline buttons the bot sends, so every callback
/// is treated as a quiz answer. The answer replaces the question message.
pub async fn handle_callback_query(bot: Bot, query: CallbackQuery, ctx: Arc<AppContext>) -> Result<()> {
    let user_id = query.from.id.0 as i64;

    // Answer the callback query first to remove loading state
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(user_id = user_id, error = %e, "Failed to answer callback query");
    }

    let reply = match query.data.as_deref() {
        Some(data) => {
            debug!(user_id = user_id, callback_data = %truncate_text(data, 64), "Processing quiz answer");
            quiz::handle_answer(&ctx, user_id, data).await
        }
        None => {
            warn!(user_id = user_id, "Callback query without data");
            quiz::handle_missing_data(&ctx, user_id).await
        }
    };

    match query.message.as_ref() {
        Some(message) => edit_reply(&bot, message.chat().id, message.id(), &reply).await,
        None => send_reply(&bot, ChatId(user_id), &reply).await,
    }
}

//! Message handlers module
//!
//! Routes plain text messages from the main menu keyboard to the section handlers

pub mod menu;

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use crate::state::AppContext;
use crate::handlers::reply::{Reply, send_reply};
use crate::handlers::sections;

pub use menu::MenuAction;

/// Reply to text that is not one of the menu labels
pub const UNRECOGNIZED: &str = "⚠️ Command not recognized. Use the keyboard!";

/// Handle incoming text messages
pub async fn handle_message(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let user_id = msg
        .from
        .as_ref()
        .map(|user| user.id.0 as i64)
        .unwrap_or(msg.chat.id.0);

    let reply = reply_to_text(&ctx, user_id, text).await;
    send_reply(&bot, msg.chat.id, &reply).await
}

/// Build the reply for a menu label, or the fallback for anything else
pub async fn reply_to_text(ctx: &AppContext, user_id: i64, text: &str) -> Reply {
    match MenuAction::from_label(text) {
        Some(action) => {
            log_user_action(user_id, action.as_str(), None);
            sections::respond(ctx, user_id, action).await
        }
        None => {
            debug!(user_id = user_id, "Unrecognized menu text");
            Reply::text(UNRECOGNIZED)
        }
    }
}

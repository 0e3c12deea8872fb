//! Start command handler
//!
//! Greets the user and installs the main menu keyboard

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use crate::state::AppContext;
use crate::handlers::messages::MenuAction;
use crate::handlers::reply::{Reply, send_reply};

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    if let Some(user) = msg.from.as_ref() {
        log_user_action(user.id.0 as i64, "start", None);
    }

    send_reply(&bot, msg.chat.id, &welcome(ctx.team_name())).await
}

/// Welcome text with the main menu keyboard attached
pub fn welcome(team_name: &str) -> Reply {
    Reply::with_keyboard(
        format!("👋 Welcome to the {} CS Bot!\nChoose an option:", team_name),
        MenuAction::keyboard(),
    )
}

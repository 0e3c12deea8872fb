//! Help command handler

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::handlers::messages::MenuAction;
use crate::handlers::reply::{Reply, send_reply};
use super::Command;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    send_reply(&bot, msg.chat.id, &help()).await
}

/// Command list followed by the menu entries
pub fn help() -> Reply {
    let menu: Vec<String> = MenuAction::ALL
        .iter()
        .map(|action| format!("• {}", action.label()))
        .collect();

    Reply::text(format!(
        "🤖 Help\n\n{}\n\nMenu options:\n{}",
        Command::descriptions(),
        menu.join("\n")
    ))
}

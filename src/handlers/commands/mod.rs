//! Command handlers module
//!
//! This module contains handlers for the bot commands /start and /help.

pub mod start;
pub mod help;

use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use tracing::debug;
use crate::utils::errors::Result;
use crate::state::AppContext;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Show the welcome message and main menu")]
    Start,
    #[command(description = "Show help information")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, ctx: Arc<AppContext>) -> Result<()> {
    debug!(chat_id = ?msg.chat.id, command = ?cmd, "Processing command");

    match cmd {
        Command::Start => start::handle_start(bot, msg, ctx).await,
        Command::Help => help::handle_help(bot, msg).await,
    }
}

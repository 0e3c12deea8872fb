//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers routing main menu labels
//! - Section handlers rendering each content section
//! - Callback handlers for quiz answer buttons

pub mod commands;
pub mod callbacks;
pub mod messages;
pub mod sections;
pub mod reply;

// Re-export commonly used handler functions
pub use commands::{Command, handle_command};
pub use callbacks::handle_callback_query;
pub use messages::{MenuAction, handle_message, reply_to_text};
pub use reply::{Reply, send_reply, edit_reply};

//! Outgoing replies
//!
//! Handlers build a [`Reply`] and leave delivery to [`send_reply`] and
//! [`edit_reply`], the only two places that talk to the Bot API.

use teloxide::{Bot, prelude::*, types::{ChatId, InlineKeyboardMarkup, KeyboardMarkup, MessageId, ReplyMarkup}};
use tracing::debug;
use crate::utils::errors::Result;

/// Text and optional keyboard to deliver to a chat
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

impl Reply {
    /// Plain text reply
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
        }
    }

    /// Reply with inline buttons under the message
    pub fn with_inline_keyboard(text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            markup: Some(ReplyMarkup::InlineKeyboard(keyboard)),
        }
    }

    /// Reply that replaces the user's keyboard
    pub fn with_keyboard(text: impl Into<String>, keyboard: KeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            markup: Some(ReplyMarkup::Keyboard(keyboard)),
        }
    }

    /// Inline keyboard attached to this reply, if any
    pub fn inline_keyboard(&self) -> Option<&InlineKeyboardMarkup> {
        match &self.markup {
            Some(ReplyMarkup::InlineKeyboard(keyboard)) => Some(keyboard),
            _ => None,
        }
    }

    /// Reply keyboard attached to this reply, if any
    pub fn keyboard(&self) -> Option<&KeyboardMarkup> {
        match &self.markup {
            Some(ReplyMarkup::Keyboard(keyboard)) => Some(keyboard),
            _ => None,
        }
    }
}

/// Send a reply as a new message
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<()> {
    let mut request = bot.send_message(chat_id, reply.text.clone());
    if let Some(markup) = reply.markup.clone() {
        request = request.reply_markup(markup);
    }

    request.await?;
    debug!(chat_id = ?chat_id, "Reply sent");
    Ok(())
}

/// Replace the text of an earlier message
///
/// Only inline keyboards can be attached to an edited message; any other
/// markup on the reply is dropped.
pub async fn edit_reply(bot: &Bot, chat_id: ChatId, message_id: MessageId, reply: &Reply) -> Result<()> {
    let mut request = bot.edit_message_text(chat_id, message_id, reply.text.clone());
    if let Some(keyboard) = reply.inline_keyboard() {
        request = request.reply_markup(keyboard.clone());
    }

    request.await?;
    debug!(chat_id = ?chat_id, message_id = message_id.0, "Message edited");
    Ok(())
}

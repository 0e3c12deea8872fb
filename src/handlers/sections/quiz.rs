//! Quiz handler
//!
//! Opens a quiz for the user and presents the question with one button per option.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::handlers::reply::Reply;
use crate::state::{ActiveQuiz, AppContext};

pub const UNAVAILABLE: &str = "❌ Quiz unavailable at the moment!";

/// Pick a question, remember it for the user and ask it
pub async fn start(ctx: &AppContext, user_id: i64) -> Reply {
    match ctx.quiz.start(user_id, &ctx.content.quiz_questions).await {
        Some(quiz) => present(&quiz, ctx.team_name()),
        None => Reply::text(UNAVAILABLE),
    }
}

/// Question text with one button per option, one option per row
pub fn present(quiz: &ActiveQuiz, team_name: &str) -> Reply {
    let rows: Vec<Vec<InlineKeyboardButton>> = quiz
        .question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| vec![InlineKeyboardButton::callback(option.clone(), quiz.callback_data(index))])
        .collect();

    Reply::with_inline_keyboard(
        format!("❓ {} Quiz:\n\n{}", team_name, quiz.question.prompt),
        InlineKeyboardMarkup::new(rows),
    )
}

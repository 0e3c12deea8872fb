//! Quiz answer callback handler

use crate::handlers::reply::Reply;
use crate::state::{AppContext, QuizOutcome};
use crate::utils::logging::log_quiz_outcome;

pub const CORRECT: &str = "✅ Correct! 🐆";
pub const EXPIRED: &str = "⚠️ Quiz expired! Start a new one.";
pub const ANSWER_ERROR: &str = "⚠️ Error processing answer";
/// Shown after a wrong answer when the question carries no explanation
pub const ENCOURAGEMENT: &str = "Play again!";

/// Evaluate the pressed button against the user's open quiz
pub async fn handle_answer(ctx: &AppContext, user_id: i64, data: &str) -> Reply {
    let outcome = ctx.quiz.answer(user_id, data).await;
    log_quiz_outcome(user_id, outcome.label());
    render_outcome(&outcome)
}

/// A button press that arrived without callback data
pub async fn handle_missing_data(ctx: &AppContext, user_id: i64) -> Reply {
    let outcome = ctx.quiz.discard(user_id, "callback query without data").await;
    log_quiz_outcome(user_id, outcome.label());
    render_outcome(&outcome)
}

pub fn render_outcome(outcome: &QuizOutcome) -> Reply {
    match outcome {
        QuizOutcome::Correct => Reply::text(CORRECT),
        QuizOutcome::Incorrect { correct_option, explanation } => {
            let explanation = explanation
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(ENCOURAGEMENT);
            Reply::text(format!(
                "❌ Almost! The correct answer was: {}\n\n💡 {}",
                correct_option, explanation
            ))
        }
        QuizOutcome::Expired => Reply::text(EXPIRED),
        QuizOutcome::Malformed { .. } => Reply::text(ANSWER_ERROR),
    }
}

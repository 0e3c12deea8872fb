//! Section handlers module
//!
//! One renderer per menu entry. Each reads a single section of the content
//! document and falls back to a fixed message when that section is empty.

pub mod matches;
pub mod results;
pub mod roster;
pub mod stats;
pub mod quiz;
pub mod trivia;

use crate::handlers::messages::MenuAction;
use crate::handlers::reply::Reply;
use crate::state::AppContext;

/// Build the reply for a menu action
pub async fn respond(ctx: &AppContext, user_id: i64, action: MenuAction) -> Reply {
    let content = ctx.content.as_ref();

    match action {
        MenuAction::UpcomingMatches => matches::render(content),
        MenuAction::PastResults => results::render(content),
        MenuAction::Roster => roster::render(content),
        MenuAction::TeamStats => stats::render(content),
        MenuAction::Quiz => quiz::start(ctx, user_id).await,
        MenuAction::Trivia => trivia::render(content, ctx.team_name()),
    }
}

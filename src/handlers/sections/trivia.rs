//! Trivia handler

use rand::seq::SliceRandom;
use crate::content::ContentDocument;
use crate::handlers::reply::Reply;

pub const UNAVAILABLE: &str = "🔍 No trivia available!";

/// Show one trivia fact picked uniformly at random
pub fn render(content: &ContentDocument, team_name: &str) -> Reply {
    let mut rng = rand::thread_rng();
    let Some(fact) = content.trivia.choose(&mut rng) else {
        return Reply::text(UNAVAILABLE);
    };

    Reply::text(format!(
        "🔍 {} Trivia:\n\n📌 {}\n{}",
        team_name, fact.title, fact.description
    ))
}

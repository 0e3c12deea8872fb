//! Past results handler

use crate::content::ContentDocument;
use crate::handlers::reply::Reply;
use crate::utils::helpers::display_scalar;

pub const UNAVAILABLE: &str = "📊 No recent results available!";

/// List every past result in file order
pub fn render(content: &ContentDocument) -> Reply {
    if content.past_results.is_empty() {
        return Reply::text(UNAVAILABLE);
    }

    let mut text = String::from("📊 Past Results:\n\n");
    for result in &content.past_results {
        text.push_str(&format!(
            "📅 {}\n⚔️ vs {}\n🏆 {}\n📈 Rating: {}\n🎥 Highlights: {}\n\n",
            result.date,
            result.opponent,
            result.outcome,
            display_scalar(&result.stats.team_rating),
            result.highlights
        ));
    }

    Reply::text(text)
}

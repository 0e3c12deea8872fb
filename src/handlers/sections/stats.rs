//! Team statistics handler

use crate::content::ContentDocument;
use crate::handlers::reply::Reply;
use crate::utils::helpers::{display_optional, display_scalar};

pub const UNAVAILABLE: &str = "📊 Statistics unavailable!";

pub fn render(content: &ContentDocument) -> Reply {
    let Some(stats) = content.stats() else {
        return Reply::text(UNAVAILABLE);
    };

    let mut text = format!(
        "📊 Team Stats:\n\n⭐ Rating: {}\n📈 Winrate: {}\n\n🗺️ Winrate by Map:\n",
        display_optional(stats.recent_rating.as_ref()),
        display_optional(stats.win_rate.as_ref()),
    );
    let maps: Vec<String> = stats
        .maps
        .iter()
        .map(|(map, rate)| format!("- {}: {}", map, display_scalar(rate)))
        .collect();
    text.push_str(&maps.join("\n"));

    Reply::text(text)
}

//! Roster handler

use crate::content::ContentDocument;
use crate::handlers::reply::Reply;

pub const UNAVAILABLE: &str = "👥 Player information unavailable!";

pub fn render(content: &ContentDocument) -> Reply {
    if content.roster.is_empty() {
        return Reply::text(UNAVAILABLE);
    }

    let mut text = String::from("👥 Roster:\n\n");
    for player in &content.roster {
        text.push_str(&format!(
            "🔹 {} {}\n🏷️ Role: {}\n💡 {}\n\n",
            player.name, player.nationality, player.role, player.fun_fact
        ));
    }

    Reply::text(text)
}

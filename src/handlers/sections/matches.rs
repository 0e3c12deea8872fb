//! Upcoming matches handler

use crate::content::ContentDocument;
use crate::handlers::reply::Reply;

pub const UNAVAILABLE: &str = "📅 No matches scheduled at the moment!";

/// List every upcoming match in file order
pub fn render(content: &ContentDocument) -> Reply {
    if content.upcoming_matches.is_empty() {
        return Reply::text(UNAVAILABLE);
    }

    let mut text = String::from("🗓️ Upcoming Matches:\n\n");
    for game in &content.upcoming_matches {
        text.push_str(&format!(
            "📅 {}\n🏆 {}\n⚔️ vs {}\n📺 {}\n\n",
            game.date, game.tournament, game.opponent, game.stream
        ));
    }

    Reply::text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Match;

    #[test]
    fn test_render_lists_matches_in_order() {
        let content = ContentDocument {
            upcoming_matches: vec![
                Match {
                    date: "12/05".to_string(),
                    tournament: "IEM Dallas".to_string(),
                    opponent: "MOUZ".to_string(),
                    stream: "twitch.tv/furiatv".to_string(),
                },
                Match {
                    date: "14/05".to_string(),
                    tournament: "IEM Dallas".to_string(),
                    opponent: "G2".to_string(),
                    stream: "twitch.tv/furiatv".to_string(),
                },
            ],
            ..Default::default()
        };

        let text = render(&content).text;
        assert!(text.starts_with("🗓️ Upcoming Matches:\n\n📅 12/05\n🏆 IEM Dallas\n⚔️ vs MOUZ\n📺 twitch.tv/furiatv\n\n"));
        assert!(text.find("MOUZ").unwrap() < text.find("G2").unwrap());
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&ContentDocument::default()).text, UNAVAILABLE);
    }
}

//! Main menu labels and routing

use teloxide::types::{KeyboardButton, KeyboardMarkup};

/// The six entries of the main menu keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    UpcomingMatches,
    PastResults,
    Roster,
    TeamStats,
    Quiz,
    Trivia,
}

impl MenuAction {
    /// Every action, in keyboard order
    pub const ALL: [MenuAction; 6] = [
        MenuAction::UpcomingMatches,
        MenuAction::PastResults,
        MenuAction::Roster,
        MenuAction::TeamStats,
        MenuAction::Quiz,
        MenuAction::Trivia,
    ];

    /// Button text for this action
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::UpcomingMatches => "Upcoming Matches",
            MenuAction::PastResults => "Past Results",
            MenuAction::Roster => "Roster",
            MenuAction::TeamStats => "Team Stats",
            MenuAction::Quiz => "Quiz",
            MenuAction::Trivia => "Trivia",
        }
    }

    /// Exact, case-sensitive lookup of a button text
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == text)
    }

    /// Name used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            MenuAction::UpcomingMatches => "upcoming_matches",
            MenuAction::PastResults => "past_results",
            MenuAction::Roster => "roster",
            MenuAction::TeamStats => "team_stats",
            MenuAction::Quiz => "quiz",
            MenuAction::Trivia => "trivia",
        }
    }

    /// Main menu keyboard, two buttons per row
    pub fn keyboard() -> KeyboardMarkup {
        let rows: Vec<Vec<KeyboardButton>> = Self::ALL
            .chunks(2)
            .map(|row| row.iter().map(|action| KeyboardButton::new(action.label())).collect())
            .collect();

        KeyboardMarkup::new(rows).resize_keyboard()
    }
}

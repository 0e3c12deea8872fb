//! FuriaBot Telegram Bot
//!
//! A Telegram bot that serves match schedules, results, roster bios, team
//! statistics, trivia and a quick quiz about an esports team, all read from
//! a single local JSON content file.

#![allow(non_snake_case)]

pub mod config;
pub mod content;
pub mod handlers;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FuriaBotError, Result};

// Re-export main components for easy access
pub use content::{ContentDocument, ContentStore};
pub use state::{AppContext, QuizSession, QuizSessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

//! Application context
//!
//! Everything a handler needs, built once in `main` and shared through the
//! dispatcher as `Arc<AppContext>`.

use std::sync::Arc;
use crate::config::Settings;
use crate::content::ContentDocument;
use super::quiz::QuizSession;

/// Application-wide context containing content, sessions and settings
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    /// Loaded once at startup and never mutated
    pub content: Arc<ContentDocument>,
    pub quiz: QuizSession,
}

impl AppContext {
    /// Create a new AppContext with no open quizzes
    pub fn new(settings: Settings, content: ContentDocument) -> Self {
        Self {
            settings,
            content: Arc::new(content),
            quiz: QuizSession::default(),
        }
    }

    /// Team name shown in greetings and headers
    pub fn team_name(&self) -> &str {
        &self.settings.bot.team_name
    }
}

//! Content document and loader
//!
//! The document is read from disk a single time. Any failure degrades to an
//! empty document so that every handler answers with its "unavailable" text
//! instead of taking the bot down.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{info, error, debug};
use crate::models::{Match, MatchResult, Player, TeamStats, QuizQuestion, TriviaFact};
use crate::utils::errors::Result;

/// All content sections served by the bot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(alias = "proximos_jogos")]
    pub upcoming_matches: Vec<Match>,
    #[serde(alias = "ultimos_jogos")]
    pub past_results: Vec<MatchResult>,
    #[serde(alias = "jogadores")]
    pub roster: Vec<Player>,
    #[serde(alias = "estatisticas_time")]
    pub team_stats: Option<TeamStats>,
    #[serde(alias = "quiz")]
    pub quiz_questions: Vec<QuizQuestion>,
    #[serde(alias = "curiosidades")]
    pub trivia: Vec<TriviaFact>,
}

impl ContentDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Team statistics, treating an object without any fields as absent
    pub fn stats(&self) -> Option<&TeamStats> {
        self.team_stats.as_ref().filter(|stats| !stats.is_empty())
    }

    /// True when no section carries any content
    pub fn is_empty(&self) -> bool {
        self.upcoming_matches.is_empty()
            && self.past_results.is_empty()
            && self.roster.is_empty()
            && self.stats().is_none()
            && self.quiz_questions.is_empty()
            && self.trivia.is_empty()
    }
}

/// Loader for the content file
#[derive(Debug, Clone)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    /// Create a loader for the given content file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the document, reporting the cause of any failure
    pub async fn try_load(&self) -> Result<ContentDocument> {
        let text = fs::read_to_string(&self.path).await?;
        let document = ContentDocument::from_json(&text)?;

        debug!(
            upcoming = document.upcoming_matches.len(),
            results = document.past_results.len(),
            roster = document.roster.len(),
            has_stats = document.stats().is_some(),
            quiz = document.quiz_questions.len(),
            trivia = document.trivia.len(),
            "Content sections loaded"
        );

        Ok(document)
    }

    /// Load the document, degrading to an empty one on failure
    pub async fn load(&self) -> ContentDocument {
        match self.try_load().await {
            Ok(document) => {
                info!(path = %self.path.display(), "Loaded team content");
                document
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to load team content, serving empty sections");
                ContentDocument::default()
            }
        }
    }
}

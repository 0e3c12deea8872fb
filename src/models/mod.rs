//! Content models module
//!
//! This module contains the records that make up the team content file

pub mod schedule;
pub mod player;
pub mod stats;
pub mod quiz;

// Re-export commonly used models
pub use schedule::{Match, MatchResult, ResultStats};
pub use player::Player;
pub use stats::TeamStats;
pub use quiz::{QuizQuestion, TriviaFact};

//! State management module
//!
//! This module handles the per-user quiz session and the shared application context

pub mod context;
pub mod quiz;
pub mod storage;

// Re-export commonly used state components
pub use context::AppContext;
pub use quiz::{ActiveQuiz, QuizAnswer, QuizOutcome, QuizSession};
pub use storage::{QuizSessionStore, SessionLookup};

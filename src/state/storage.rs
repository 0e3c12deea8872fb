//! Quiz session storage
//!
//! In-memory store of the quiz each user is currently answering. Sessions
//! live only as long as the process; a restart expires every open quiz.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use super::quiz::ActiveQuiz;

/// Result of looking up a session for an incoming answer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    /// The session matched and has been removed from the store
    Taken(ActiveQuiz),
    /// The user has no open quiz
    Missing,
    /// The answer belongs to an older quiz; the open one is left in place
    Stale,
}

/// Per-user quiz sessions keyed by Telegram user id
#[derive(Debug, Clone, Default)]
pub struct QuizSessionStore {
    sessions: Arc<Mutex<HashMap<i64, ActiveQuiz>>>,
}

impl QuizSessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a quiz for a user, replacing any quiz they already had open
    pub async fn save(&self, user_id: i64, quiz: ActiveQuiz) {
        let mut sessions = self.sessions.lock().await;
        if let Some(previous) = sessions.insert(user_id, quiz) {
            debug!(user_id = user_id, instance_id = %previous.instance_id, "Replaced open quiz");
        }
    }

    /// Get a copy of the user's open quiz
    pub async fn load(&self, user_id: i64) -> Option<ActiveQuiz> {
        self.sessions.lock().await.get(&user_id).cloned()
    }

    /// Remove the user's open quiz; returns whether one existed
    pub async fn clear(&self, user_id: i64) -> bool {
        let removed = self.sessions.lock().await.remove(&user_id).is_some();
        debug!(user_id = user_id, removed = removed, "Cleared quiz session");
        removed
    }

    /// Atomically remove the user's quiz for answering
    ///
    /// When `instance_id` is given it must match the open quiz, otherwise the
    /// answer is stale and the open quiz is kept. A second answer for the same
    /// quiz always sees [`SessionLookup::Missing`].
    pub async fn take_for_answer(&self, user_id: i64, instance_id: Option<&str>) -> SessionLookup {
        let mut sessions = self.sessions.lock().await;

        let is_stale = match sessions.get(&user_id) {
            None => return SessionLookup::Missing,
            Some(open) => instance_id.is_some_and(|id| id != open.instance_id),
        };
        if is_stale {
            return SessionLookup::Stale;
        }

        sessions
            .remove(&user_id)
            .map(SessionLookup::Taken)
            .unwrap_or(SessionLookup::Missing)
    }

    /// Number of users with an open quiz
    pub async fn active_sessions(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

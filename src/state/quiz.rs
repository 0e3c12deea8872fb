//! Quiz session state machine
//!
//! A user is either idle or awaiting an answer to exactly one question.
//! Starting a quiz stores the question; any answer callback removes it before
//! evaluation, so the session is gone on every exit path.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use uuid::Uuid;
use crate::models::QuizQuestion;
use crate::utils::errors::{FuriaBotError, Result};
use crate::utils::helpers::format_timestamp;
use super::storage::{QuizSessionStore, SessionLookup};

/// Callback data prefix for quiz answer buttons
pub const CALLBACK_PREFIX: &str = "quiz";

/// A question a user has been asked and not yet answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveQuiz {
    /// Distinguishes buttons of this quiz from buttons of earlier ones
    pub instance_id: String,
    pub question: QuizQuestion,
    pub started_at: DateTime<Utc>,
}

impl ActiveQuiz {
    pub fn new(question: QuizQuestion) -> Self {
        Self {
            instance_id: Uuid::new_v4().simple().to_string(),
            question,
            started_at: Utc::now(),
        }
    }

    /// Callback data for the button of the option at `index`
    pub fn callback_data(&self, index: usize) -> String {
        format!("{}:{}:{}", CALLBACK_PREFIX, self.instance_id, index)
    }
}

/// A parsed answer callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    pub instance_id: Option<String>,
    /// Raw option index text, validated by [`QuizAnswer::option_index`]
    pub choice: String,
}

impl QuizAnswer {
    /// Parse `quiz:<instance>:<index>`, or a bare `<index>` without any tag
    pub fn parse(data: &str) -> Self {
        let tagged = data
            .strip_prefix(CALLBACK_PREFIX)
            .and_then(|rest| rest.strip_prefix(':'));

        match tagged {
            Some(rest) => match rest.rsplit_once(':') {
                Some((instance, choice)) => Self {
                    instance_id: Some(instance.to_string()),
                    choice: choice.to_string(),
                },
                None => Self {
                    instance_id: None,
                    choice: rest.to_string(),
                },
            },
            None => Self {
                instance_id: None,
                choice: data.to_string(),
            },
        }
    }

    /// Zero-based option index chosen by the user
    pub fn option_index(&self) -> Result<usize> {
        self.choice
            .trim()
            .parse::<usize>()
            .map_err(|_| FuriaBotError::QuizPayload(format!("option index {:?} is not a number", self.choice)))
    }
}

/// What happened to an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct,
    Incorrect {
        correct_option: String,
        explanation: Option<String>,
    },
    /// No open quiz, or the button belongs to an older one
    Expired,
    /// The payload or the stored question could not be evaluated
    Malformed { reason: String },
}

impl QuizOutcome {
    /// Short name used in logs
    pub fn label(&self) -> &'static str {
        match self {
            QuizOutcome::Correct => "correct",
            QuizOutcome::Incorrect { .. } => "incorrect",
            QuizOutcome::Expired => "expired",
            QuizOutcome::Malformed { .. } => "malformed",
        }
    }
}

/// Compare an answer against a question
pub fn evaluate(question: &QuizQuestion, answer: &QuizAnswer) -> Result<QuizOutcome> {
    let chosen = answer.option_index()?;
    let correct = question
        .correct
        .ok_or_else(|| FuriaBotError::QuizPayload("question has no correct option index".to_string()))?;
    let correct_option = question.correct_option().ok_or_else(|| {
        FuriaBotError::QuizPayload(format!(
            "correct index {} is out of range for {} options",
            correct,
            question.options.len()
        ))
    })?;

    if chosen == correct {
        Ok(QuizOutcome::Correct)
    } else {
        Ok(QuizOutcome::Incorrect {
            correct_option: correct_option.to_string(),
            explanation: question.explanation.clone(),
        })
    }
}

/// Quiz flow over the session store
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    store: QuizSessionStore,
}

impl QuizSession {
    /// Underlying session store
    pub fn store(&self) -> &QuizSessionStore {
        &self.store
    }

    /// Pick a random question and open a quiz for the user
    ///
    /// Returns `None` when there are no questions to ask.
    pub async fn start(&self, user_id: i64, questions: &[QuizQuestion]) -> Option<ActiveQuiz> {
        let question = {
            let mut rng = rand::thread_rng();
            questions.choose(&mut rng)?.clone()
        };
        let quiz = ActiveQuiz::new(question);

        debug!(
            user_id = user_id,
            instance_id = %quiz.instance_id,
            started_at = %format_timestamp(quiz.started_at),
            options = quiz.question.options.len(),
            "Opening quiz"
        );

        self.store.save(user_id, quiz.clone()).await;
        Some(quiz)
    }

    /// Handle an answer callback for the user
    pub async fn answer(&self, user_id: i64, data: &str) -> QuizOutcome {
        let answer = QuizAnswer::parse(data);

        let quiz = match self.store.take_for_answer(user_id, answer.instance_id.as_deref()).await {
            SessionLookup::Taken(quiz) => quiz,
            SessionLookup::Missing => {
                info!(user_id = user_id, "Answer received without an open quiz");
                return QuizOutcome::Expired;
            }
            SessionLookup::Stale => {
                info!(user_id = user_id, instance_id = ?answer.instance_id, "Answer received for a replaced quiz");
                return QuizOutcome::Expired;
            }
        };

        match evaluate(&quiz.question, &answer) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(user_id = user_id, instance_id = %quiz.instance_id, error = %e, "Failed to evaluate quiz answer");
                QuizOutcome::Malformed { reason: e.to_string() }
            }
        }
    }

    /// Drop the user's open quiz for a callback that cannot be read at all
    pub async fn discard(&self, user_id: i64, reason: &str) -> QuizOutcome {
        let had_quiz = self.store.clear(user_id).await;
        error!(user_id = user_id, had_quiz = had_quiz, reason = reason, "Discarding unreadable quiz answer");
        QuizOutcome::Malformed { reason: reason.to_string() }
    }
}

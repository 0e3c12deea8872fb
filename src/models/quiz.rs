//! Quiz and trivia models

use serde::{Deserialize, Serialize};

/// A multiple-choice quiz question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(alias = "pergunta")]
    pub prompt: String,
    #[serde(alias = "opcoes")]
    pub options: Vec<String>,
    /// Zero-based index into `options`
    #[serde(alias = "resposta")]
    pub correct: Option<usize>,
    #[serde(alias = "explicacao")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// Text of the correct option, if the index points at one
    pub fn correct_option(&self) -> Option<&str> {
        self.correct
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriviaFact {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "descricao")]
    pub description: String,
}

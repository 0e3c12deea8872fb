//! Match schedule and result models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An upcoming match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Match {
    #[serde(alias = "data")]
    pub date: String,
    #[serde(alias = "campeonato")]
    pub tournament: String,
    #[serde(alias = "adversario")]
    pub opponent: String,
    #[serde(alias = "stream_oficial")]
    pub stream: String,
}

/// A finished match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(alias = "data")]
    pub date: String,
    #[serde(alias = "adversario")]
    pub opponent: String,
    #[serde(alias = "resultado")]
    pub outcome: String,
    #[serde(alias = "estatisticas")]
    pub stats: ResultStats,
    #[serde(alias = "melhores_momentos")]
    pub highlights: String,
}

/// Per-match statistics nested inside a [`MatchResult`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultStats {
    #[serde(alias = "rating_time")]
    pub team_rating: Value,
}

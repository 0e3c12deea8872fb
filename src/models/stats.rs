//! Team statistics model

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregate team statistics
///
/// Scalars are kept as raw JSON so that both `"65%"` and `0.65` render as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStats {
    #[serde(alias = "rating_6_meses")]
    pub recent_rating: Option<Value>,
    #[serde(alias = "winrate")]
    pub win_rate: Option<Value>,
    /// Map name to win rate, rendered in key order
    #[serde(alias = "mapas")]
    pub maps: BTreeMap<String, Value>,
    /// Keys this bot does not display; their presence still marks the section as filled
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl TeamStats {
    /// True only for an object without any keys
    pub fn is_empty(&self) -> bool {
        self.recent_rating.is_none() && self.win_rate.is_none() && self.maps.is_empty() && self.other.is_empty()
    }
}

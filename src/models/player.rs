//! Roster model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    #[serde(alias = "nome")]
    pub name: String,
    /// Usually a flag emoji
    #[serde(alias = "nacionalidade")]
    pub nationality: String,
    pub role: String,
    #[serde(alias = "curiosidade")]
    pub fun_fact: String,
}

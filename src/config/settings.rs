//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;

/// Environment variable holding the Telegram bot token
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Team name used in greetings and quiz headers
    pub team_name: String,
}

/// Content file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// `BOT_TOKEN` always wins over the file and `FURIABOT__BOT__TOKEN`.
    pub fn new() -> Result<Self> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.team_name", defaults.bot.team_name)?
            .set_default("content.path", defaults.content.path)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("FURIABOT").separator("__"))
            .set_override_option("bot.token", std::env::var(BOT_TOKEN_ENV).ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                team_name: "FURIA".to_string(),
            },
            content: ContentConfig {
                path: "data/team_content.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                file_path: None,
            },
        }
    }
}

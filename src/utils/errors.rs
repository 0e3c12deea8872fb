//! Error handling for FuriaBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for FuriaBot application
#[derive(Error, Debug)]
pub enum FuriaBotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid quiz payload: {0}")]
    QuizPayload(String),
}

/// Result type alias for FuriaBot operations
pub type Result<T> = std::result::Result<T, FuriaBotError>;

impl FuriaBotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            FuriaBotError::Telegram(_) => true,
            FuriaBotError::Config(_) => false,
            FuriaBotError::ConfigLoad(_) => false,
            FuriaBotError::Serialization(_) => true,
            FuriaBotError::Io(_) => true,
            FuriaBotError::QuizPayload(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FuriaBotError::Config(_) => ErrorSeverity::Critical,
            FuriaBotError::ConfigLoad(_) => ErrorSeverity::Critical,
            FuriaBotError::QuizPayload(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Placeholder shown when a statistic is missing from the content file
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a loosely typed JSON scalar for display
///
/// Content authors write ratings both as `1.05` and `"1.05"`, so strings are
/// shown without quotes and `null` falls back to [`NOT_AVAILABLE`].
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render an optional scalar, using [`NOT_AVAILABLE`] when absent
pub fn display_optional(value: Option<&Value>) -> String {
    value.map(display_scalar).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

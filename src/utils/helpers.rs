//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};

/// Normalize a choice label for matching.
///
/// Button copy drifts between versions of the menu (emoji prefixes, stray
/// whitespace, casing), so all label comparison goes through this single
/// normalization point: strip emoji, collapse whitespace, fold case.
pub fn normalize_label(label: &str) -> String {
    let stripped = strip_emoji(label);
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Remove emoji and variation selectors from text.
pub fn strip_emoji(text: &str) -> String {
    // Pictographs, symbols, dingbats and the variation selector
    let pattern = regex::Regex::new(r"[\x{1F000}-\x{1FAFF}\x{2600}-\x{27BF}\x{2B00}-\x{2BFF}\x{FE0F}]")
        .expect("emoji pattern is valid");
    pattern.replace_all(text, "").into_owned()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Join a list of attributes for display ("Relaxed, Happy, Sleepy")
pub fn format_list(items: &[String]) -> String {
    items.join(", ")
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Find the right strain"), "find the right strain");
        assert_eq!(normalize_label("  Find   the right strain "), "find the right strain");
        assert_eq!(normalize_label("🌿 Find the right strain"), "find the right strain");
        assert_eq!(normalize_label("Pain Relief 💊"), "pain relief");
    }

    #[test]
    fn test_strip_emoji_keeps_plain_text() {
        assert_eq!(strip_emoji("THC vs CBD"), "THC vs CBD");
        assert_eq!(strip_emoji("Sleep 😴"), "Sleep ");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }

    #[test]
    fn test_format_list() {
        let items = vec!["Berry".to_string(), "Sweet".to_string()];
        assert_eq!(format_list(&items), "Berry, Sweet");
        assert_eq!(format_list(&[]), "");
    }
}

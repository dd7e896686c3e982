//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{BudBuddyError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_chat_config(&settings.chat)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate recommendation API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(BudBuddyError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url)
        .map_err(|e| BudBuddyError::Config(format!("Invalid API base URL: {}", e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(BudBuddyError::Config(
            format!("API base URL must be http or https, got '{}'", parsed.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(BudBuddyError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate chat pacing configuration
fn validate_chat_config(config: &super::ChatConfig) -> Result<()> {
    // Anything above a few seconds makes the chat feel broken
    if config.thinking_delay_ms > 10_000 {
        return Err(BudBuddyError::Config(
            "Thinking delay must be at most 10000 ms".to_string()
        ));
    }

    if config.choice_delay_ms > 10_000 {
        return Err(BudBuddyError::Config(
            "Choice delay must be at most 10000 ms".to_string()
        ));
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.profile_path.is_empty() {
        return Err(BudBuddyError::Config(
            "Profile path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BudBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BudBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_empty() {
        return Err(BudBuddyError::Config(
            "Log directory is required".to_string()
        ));
    }

    Ok(())
}

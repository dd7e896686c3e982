//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the BudBuddy application. The chat owns stdout, so log output goes to a
//! rolling file only.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the appender guard; dropping it stops the background writer,
/// so the caller must keep it alive for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, "budbuddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a user menu choice with structured data
pub fn log_user_choice(session_id: &str, step: &str, choice: &str) {
    info!(
        session_id = session_id,
        step = step,
        choice = choice,
        "User choice handled"
    );
}

/// Log recommendation API calls
pub fn log_recommendation(session_id: &str, count: usize, duration_ms: u64) {
    info!(
        session_id = session_id,
        count = count,
        duration_ms = duration_ms,
        "Recommendation received"
    );
}

/// Log API errors with context
pub fn log_api_error(session_id: &str, error: &str) {
    tracing::error!(
        session_id = session_id,
        error = error,
        "Recommendation API error"
    );
}

//! Error handling for BudBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the BudBuddy application
#[derive(Error, Debug)]
pub enum BudBuddyError {
    #[error("Recommendation API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown step: {0}")]
    UnknownStep(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Choice '{choice}' is not offered at step '{step}'")]
    InvalidChoice { step: String, choice: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Recommendation API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("recommendation request failed: {0}")]
    RequestFailed(String),

    #[error("recommendation request timed out")]
    Timeout,

    #[error("invalid recommendation response: {0}")]
    InvalidResponse(String),

    #[error("recommendation service unavailable")]
    ServiceUnavailable,

    #[error("no matching strains (HTTP {0})")]
    NoMatches(u16),
}

/// Result type alias for BudBuddy operations
pub type Result<T> = std::result::Result<T, BudBuddyError>;

/// Result type alias for recommendation API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl BudBuddyError {
    /// Check if the error is recoverable from within the chat
    /// (i.e. the menu can simply be restarted)
    pub fn is_recoverable(&self) -> bool {
        match self {
            BudBuddyError::Api(_) => true,
            BudBuddyError::Http(_) => true,
            BudBuddyError::Io(_) => true,
            BudBuddyError::InvalidChoice { .. } => true,
            BudBuddyError::Config(_) => false,
            BudBuddyError::UnknownStep(_) => false,
            BudBuddyError::InvalidStateTransition { .. } => false,
            BudBuddyError::Serialization(_) => false,
            BudBuddyError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BudBuddyError::Config(_) => ErrorSeverity::Critical,
            BudBuddyError::UnknownStep(_) => ErrorSeverity::Critical,
            BudBuddyError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            BudBuddyError::InvalidChoice { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

impl ApiError {
    /// Non-2xx responses are reported as "no matches"; everything else
    /// (transport or parse failures) gets the generic retry prompt.
    pub fn is_no_matches(&self) -> bool {
        matches!(self, ApiError::NoMatches(_))
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

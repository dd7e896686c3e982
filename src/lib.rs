//! BudBuddy
//!
//! A scripted budtender chat: a fixed-menu dialogue that walks a user
//! through experience, effect and flavor questions, then calls a backend
//! recommendation endpoint and renders the matching strains as text cards.
//! The library exposes the conversation state machine and the API client;
//! the binary adds a terminal front-end.

#![allow(non_snake_case)]

pub mod chat;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, BudBuddyError, Result};

// Re-export main components for easy access
pub use chat::{ChatEngine, Reply};
pub use services::RecommendService;
pub use state::{ConversationContext, FlowManager, ProfileStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

//! Conversation context management
//!
//! This module tracks a single chat session: the current menu step and the
//! preference bag accumulated so far. The context is mutated in place on
//! every user choice and reset wholesale on "start over".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PrefKey, Preferences};
use crate::state::flow::steps;

/// One page session's worth of conversation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Session identifier, used only for log correlation
    pub session_id: Uuid,
    /// Current menu step
    pub step: String,
    /// Accumulated user selections
    pub preferences: Preferences,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConversationContext {
    /// Create a fresh context positioned at the welcome step
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            step: steps::WELCOME.to_string(),
            preferences: Preferences::default(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Move to another step
    pub fn goto(&mut self, step: &str) {
        self.step = step.to_string();
        self.updated_at = Utc::now();
    }

    /// Record a preference selection
    pub fn set_preference(&mut self, key: PrefKey, value: &str) {
        self.preferences.set(key, value);
        self.updated_at = Utc::now();
    }

    /// Clear all preferences and return to the welcome step.
    /// The session id survives so a restarted conversation stays
    /// correlated in the logs.
    pub fn reset(&mut self) {
        self.preferences.clear();
        self.step = steps::WELCOME.to_string();
        self.updated_at = Utc::now();
    }

    pub fn is_at_step(&self, step: &str) -> bool {
        self.step == step
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_starts_at_welcome() {
        let context = ConversationContext::new();
        assert!(context.is_at_step(steps::WELCOME));
        assert!(context.preferences.is_empty());
    }

    #[test]
    fn test_goto_and_preferences() {
        let mut context = ConversationContext::new();
        context.goto(steps::EXPERIENCE_LEVEL);
        context.set_preference(PrefKey::Experience, "Occasional user");

        assert!(context.is_at_step(steps::EXPERIENCE_LEVEL));
        assert_eq!(context.preferences.get(PrefKey::Experience), Some("Occasional user"));
    }

    #[test]
    fn test_reset_clears_preferences_and_returns_to_welcome() {
        let mut context = ConversationContext::new();
        let session_id = context.session_id;

        context.goto(steps::DESIRED_EFFECT);
        context.set_preference(PrefKey::Experience, "New to cannabis");
        context.set_preference(PrefKey::Effect, "Sleep");

        context.reset();

        assert!(context.is_at_step(steps::WELCOME));
        assert!(context.preferences.is_empty());
        assert_eq!(context.session_id, session_id);
    }
}

//! Data models
//!
//! Wire types for the recommendation API and the preference bag the chat
//! accumulates on the way there.

pub mod preferences;
pub mod strain;

pub use preferences::{PrefKey, Preferences, RecommendRequest, RecommendResponse};
pub use strain::Strain;

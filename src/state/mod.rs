//! State management module
//!
//! This module holds the conversation state machine: the menu flow table,
//! the per-session context, and the local profile file.

pub mod context;
pub mod flow;
pub mod storage;

pub use context::ConversationContext;
pub use flow::{Choice, ChoiceAction, FlowManager, FlowStep};
pub use storage::{ProfileStorage, StoredProfile};

//! Chat module
//!
//! The conversation engine and the text rendering of its results.

pub mod engine;
pub mod render;

pub use engine::{ChatEngine, Reply};

//! Services module
//!
//! This module contains clients for external collaborators.

pub mod recommend;

pub use recommend::RecommendService;

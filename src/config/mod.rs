//! Configuration module for Pocketbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Recommendation thresholds

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::{RecommendationPolicy, Settings};

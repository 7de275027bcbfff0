//! Configuration module for sowgen
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SowPaths;
pub use settings::Settings;

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod compute;
pub mod context;
pub mod generate;

pub use compute::{handle_compute, handle_workdays};
pub use context::handle_context;
pub use generate::{handle_generate, GenerateArgs};

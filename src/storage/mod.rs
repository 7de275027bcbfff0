//! Storage layer for sowgen
//!
//! File-backed pieces of a generation request: submission loading and
//! atomic output writes. The derivation engine itself never touches the
//! file system.

pub mod file_io;
pub mod submission;

pub use submission::load_submission;

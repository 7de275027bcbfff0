//! Custom error types for sowgen
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Row-level numeric and date parse failures are deliberately *not* part of
//! this hierarchy: the derivation engine swallows them and defaults the
//! affected cell to zero (see the `lenient` module). Only whole-operation
//! failures surface here.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for sowgen operations
#[derive(Error, Debug)]
pub enum SowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Submission file errors (unreadable, wrong extension, missing mode)
    #[error("Submission error: {0}")]
    Submission(String),

    /// No template was supplied before generation was requested
    #[error("No template supplied: pass --template or set a default template before generating")]
    TemplateMissing,

    /// Template file exists but cannot be parsed or rendered
    #[error("Template error in {}: {reason}", .path.display())]
    Template { path: PathBuf, reason: String },

    /// CSV row import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors (output directory, atomic writes)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SowError {
    /// Create a template error for a path
    pub fn template(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Template {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is the missing-template warning
    pub fn is_template_missing(&self) -> bool {
        matches!(self, Self::TemplateMissing)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SowError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SowError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for sowgen operations
pub type SowResult<T> = Result<T, SowError>;

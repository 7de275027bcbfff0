//! Path management for sowgen
//!
//! Provides XDG-compliant path resolution for configuration, templates, and
//! generated documents.
//!
//! ## Path Resolution Order
//!
//! 1. `SOWGEN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sowgen` or `~/.config/sowgen`
//! 3. Windows: `%APPDATA%\sowgen`

use std::path::PathBuf;

use crate::error::SowError;

/// Manages all paths used by sowgen
#[derive(Debug, Clone)]
pub struct SowPaths {
    /// Base directory for all sowgen data
    base_dir: PathBuf,
}

impl SowPaths {
    /// Create a new SowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SowError> {
        let base_dir = if let Ok(custom) = std::env::var("SOWGEN_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/sowgen/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the templates directory (~/.config/sowgen/templates/)
    pub fn templates_dir(&self) -> PathBuf {
        self.base_dir.join("templates")
    }

    /// Get the default output directory (~/.config/sowgen/generated_sows/)
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join("generated_sows")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.templates_dir())
            .map_err(|e| SowError::Io(format!("Failed to create templates directory: {}", e)))?;

        std::fs::create_dir_all(self.output_dir())
            .map_err(|e| SowError::Io(format!("Failed to create output directory: {}", e)))?;

        Ok(())
    }

    /// Check if sowgen has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SowError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SowError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("sowgen"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SowError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SowError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("sowgen"))
}

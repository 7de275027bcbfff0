//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave partial output on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{SowError, SowResult};

/// Read a file to a string, with a storage error naming the path
pub fn read_text(path: &Path) -> SowResult<String> {
    fs::read_to_string(path)
        .map_err(|e| SowError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// Either the complete file lands at the target path or nothing is
/// modified; a crash mid-write never leaves a truncated document behind.
pub fn write_text_atomic(path: &Path, contents: &str) -> SowResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SowError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SowError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| SowError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SowError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SowError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        SowError::Storage(format!("Failed to move file into place: {}", e))
    })?;

    Ok(())
}

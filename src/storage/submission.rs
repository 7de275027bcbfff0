//! Submission loading
//!
//! Deserializes a SOW submission from YAML or JSON (selected by file
//! extension) and resolves any CSV side files into their row tables. A CSV
//! side file that does not match the selected mode is ignored with a
//! warning rather than failing the load.

use std::path::{Path, PathBuf};

use crate::error::{SowError, SowResult};
use crate::models::{ProjectType, SowForm};
use crate::services::import;

use super::file_io;

/// Load a submission file and resolve its CSV side files
pub fn load_submission(path: &Path) -> SowResult<SowForm> {
    if !path.exists() {
        return Err(SowError::Submission(format!(
            "Submission file not found: {}",
            path.display()
        )));
    }

    let contents = file_io::read_text(path)?;
    let extension = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("");

    let mut form: SowForm = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
            SowError::Submission(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        "json" => serde_json::from_str(&contents).map_err(|e| {
            SowError::Submission(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        other => {
            return Err(SowError::Submission(format!(
                "Unsupported submission format '{}' (expected .yaml, .yml, or .json)",
                other
            )))
        }
    };

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    attach_csv_rows(&mut form, base)?;

    Ok(form)
}

/// Append rows from CSV side files to the mode's table
fn attach_csv_rows(form: &mut SowForm, base: &Path) -> SowResult<()> {
    let mode = form.project.name();

    if let Some(csv_path) = &form.resources_csv {
        let csv_path = resolve(base, csv_path);
        match &mut form.project {
            ProjectType::TimeAndMaterials { resources } => {
                resources.extend(import::read_resources_csv(&csv_path)?);
            }
            _ => log::warn!("resources_csv ignored: submission mode is {}", mode),
        }
    }

    if let Some(csv_path) = &form.milestones_csv {
        let csv_path = resolve(base, csv_path);
        match &mut form.project {
            ProjectType::FixedFee { milestones, .. } => {
                milestones.extend(import::read_milestones_csv(&csv_path)?);
            }
            _ => log::warn!("milestones_csv ignored: submission mode is {}", mode),
        }
    }

    Ok(())
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

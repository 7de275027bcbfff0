//! Document generation
//!
//! Ties the pieces together for one generation request: stash the supplied
//! template alongside the output (parity with the upload step of the
//! original form), render it against the context, and write the result
//! atomically under the required file name. A missing template aborts before
//! anything is written.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SowError, SowResult};
use crate::models::SowForm;
use crate::storage::file_io;

use super::{RenderContext, Template};

/// File extension assumed when the template has none
const DEFAULT_EXTENSION: &str = "docx";

/// The output file name for a submission:
/// `{sow_num} - {sow_name} - {start} to {end}.{ext}`
pub fn output_file_name(form: &SowForm, extension: &str) -> String {
    format!(
        "{} - {} - {} to {}.{}",
        form.sow_num,
        form.sow_name,
        form.range.start_long(),
        form.range.end_long(),
        extension
    )
}

/// The extension of a template path, used for the generated output as well
pub fn template_extension(path: &Path) -> &str {
    path.extension()
        .and_then(OsStr::to_str)
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Copy the supplied template into the output directory before rendering
pub fn stash_template(template: &Path, output_dir: &Path) -> SowResult<PathBuf> {
    if !template.exists() {
        return Err(SowError::TemplateMissing);
    }

    fs::create_dir_all(output_dir).map_err(|e| {
        SowError::Storage(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let stashed = output_dir.join(format!("template.{}", template_extension(template)));
    fs::copy(template, &stashed).map_err(|e| {
        SowError::Storage(format!(
            "Failed to stash template {}: {}",
            template.display(),
            e
        ))
    })?;

    log::debug!("stashed template at {}", stashed.display());
    Ok(stashed)
}

/// Render a template file against a context
pub fn render_to_string(template_path: &Path, ctx: &RenderContext) -> SowResult<String> {
    if !template_path.exists() {
        return Err(SowError::TemplateMissing);
    }

    let source = fs::read_to_string(template_path).map_err(|e| {
        SowError::template(
            template_path,
            format!("not readable as UTF-8 text: {}", e),
        )
    })?;

    let template = Template::parse(&source)
        .map_err(|e| SowError::template(template_path, e.to_string()))?;

    Ok(template.render(ctx))
}

/// Render a template and write the document under `output_dir/file_name`
///
/// The write is atomic: either the complete document lands at the target
/// path or nothing does.
pub fn generate(
    template_path: &Path,
    ctx: &RenderContext,
    output_dir: &Path,
    file_name: &str,
) -> SowResult<PathBuf> {
    let rendered = render_to_string(template_path, ctx)?;

    let output_path = output_dir.join(file_name);
    file_io::write_text_atomic(&output_path, &rendered)?;

    log::debug!("generated document at {}", output_path.display());
    Ok(output_path)
}

//! Generate command
//!
//! The full pipeline for one submission: load, derive, assemble the
//! context, stash the template, render, and write the named output file.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::{Settings, SowPaths};
use crate::error::{SowError, SowResult};
use crate::render::document;
use crate::services::build_context;
use crate::storage::{file_io, load_submission};

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the submission file (.yaml, .yml, or .json)
    pub submission: PathBuf,

    /// Template document with placeholders (overrides the configured default)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Directory for generated documents (overrides the configured default)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write the render context as JSON to this path
    #[arg(long)]
    pub context_out: Option<PathBuf>,
}

/// Handle the generate command
pub fn handle_generate(
    args: GenerateArgs,
    settings: &Settings,
    paths: &SowPaths,
) -> SowResult<()> {
    let form = load_submission(&args.submission)?;
    let ctx = build_context(&form, Local::now().date_naive());

    // The template must exist before anything is written
    let template = args
        .template
        .or_else(|| settings.default_template.clone())
        .ok_or(SowError::TemplateMissing)?;

    let output_dir = args
        .output_dir
        .or_else(|| settings.output_dir.clone())
        .unwrap_or_else(|| paths.output_dir());

    let extension = document::template_extension(&template).to_string();
    let stashed = document::stash_template(&template, &output_dir)?;

    let file_name = document::output_file_name(&form, &extension);
    let output_path = document::generate(&stashed, &ctx, &output_dir, &file_name)?;

    if let Some(context_out) = args.context_out {
        file_io::write_text_atomic(&context_out, &ctx.to_json_pretty()?)?;
        println!("Render context written: {}", context_out.display());
    }

    println!("SOW document generated: {}", output_path.display());
    Ok(())
}

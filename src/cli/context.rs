//! Context command
//!
//! Prints the RenderContext for a submission as JSON, the hand-off format
//! for external document renderers.

use std::path::Path;

use chrono::Local;

use crate::error::SowResult;
use crate::services::build_context;
use crate::storage::load_submission;

/// Handle the context command
pub fn handle_context(submission: &Path, compact: bool) -> SowResult<()> {
    let form = load_submission(submission)?;
    let ctx = build_context(&form, Local::now().date_naive());

    let json = if compact {
        ctx.to_json()?
    } else {
        ctx.to_json_pretty()?
    };
    println!("{}", json);

    Ok(())
}

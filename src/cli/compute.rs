//! Compute and workdays commands
//!
//! Derivation previews without document generation.

use std::path::Path;

use chrono::NaiveDate;

use crate::calendar::count_business_days;
use crate::config::Settings;
use crate::display;
use crate::error::SowResult;
use crate::models::{Money, ProjectType};
use crate::services::derivation::{
    derive_change_order, derive_fixed_fee, derive_time_and_materials,
};
use crate::storage::load_submission;

/// Handle the compute command: print derived figures for a submission
pub fn handle_compute(submission: &Path, settings: &Settings) -> SowResult<()> {
    let form = load_submission(submission)?;
    let symbol = settings.currency_symbol.as_str();

    println!(
        "SOW {} - {} [{}]",
        form.sow_num,
        form.sow_name,
        form.project.name()
    );
    println!("{} to {}", form.range.start_long(), form.range.end_long());

    let workdays = count_business_days(form.range.start, form.range.end);
    println!("{}", display::format_workdays_line(workdays));
    println!();

    match &form.project {
        ProjectType::TimeAndMaterials { resources } => {
            let summary = derive_time_and_materials(resources);
            print!("{}", display::format_resource_register(&summary.rows));
            println!();
            println!("{}", display::format_total_line(summary.total, symbol));
        }
        ProjectType::FixedFee { total_fees, milestones } => {
            let breakdown = derive_fixed_fee(total_fees, milestones);
            print!("{}", display::format_milestone_register(&breakdown.rows));
            println!();
            println!(
                "Total fees:              {}",
                Money::from_f64(breakdown.total_fees).format_grouped(symbol)
            );
            println!(
                "Total milestone payment: {}",
                breakdown.milestone_total.format_grouped(symbol)
            );
        }
        ProjectType::ChangeOrder {
            fees_change_order,
            fees_original_sow,
            sow_range,
            ..
        } => {
            let delta = derive_change_order(fees_change_order, fees_original_sow);
            println!(
                "Original SOW period: {} to {}",
                sow_range.start_long(),
                sow_range.end_long()
            );
            print!("{}", display::format_change_order_summary(&delta, symbol));
        }
    }

    Ok(())
}

/// Handle the workdays command: the display-only day-count statistic
pub fn handle_workdays(start: NaiveDate, end: NaiveDate) {
    let count = count_business_days(start, end);
    println!("{}", display::format_workdays_line(count));
}

//! RenderContext assembly
//!
//! Builds the mode-shaped named-value mapping consumed by the document
//! renderer. Key names, including their irregular casings (`pm_SP`, `Fees`,
//! `Fees_co`), are a compatibility contract with existing client templates
//! and must not be normalized.
//!
//! Top-level dates are formatted long-form ("January 05, 2025") before
//! insertion; row-level date cells pass through exactly as entered.

use chrono::NaiveDate;

use crate::calendar::long_date;
use crate::lenient::Cell;
use crate::models::{ProjectType, SowForm};
use crate::render::{ContextRow, RenderContext};

use super::derivation::{
    derive_change_order, derive_fixed_fee, derive_time_and_materials, FixedFeeBreakdown, TmSummary,
};

/// Assemble the RenderContext for a submission
///
/// `generated_on` is the document generation date; it is passed in rather
/// than read from a clock so context assembly stays a pure function.
pub fn build_context(form: &SowForm, generated_on: NaiveDate) -> RenderContext {
    match &form.project {
        ProjectType::TimeAndMaterials { resources } => {
            let summary = derive_time_and_materials(resources);
            tm_context(form, &summary, generated_on)
        }
        ProjectType::FixedFee { total_fees, milestones } => {
            let breakdown = derive_fixed_fee(total_fees, milestones);
            fixed_fee_context(form, &breakdown, generated_on)
        }
        ProjectType::ChangeOrder {
            change_ref,
            fees_change_order,
            fees_original_sow,
            sow_range,
        } => {
            let delta = derive_change_order(fees_change_order, fees_original_sow);
            let mut ctx = RenderContext::new();
            ctx.text("Change", change_ref.clone());
            ctx.text("sow_num", form.sow_num.clone());
            ctx.text("sow_name", form.sow_name.clone());
            ctx.text("scope_text", form.scope_text.clone());
            ctx.text("start_date", form.range.start_long());
            ctx.text("end_date", form.range.end_long());
            ctx.text("sow_end", sow_range.end_long());
            ctx.text("sow_str", sow_range.start_long());
            ctx.number("Fees_co", delta.fees_change_order);
            ctx.number("Fees_sow", delta.fees_original_sow);
            ctx.number("difference", delta.difference);
            ctx
        }
    }
}

fn tm_context(form: &SowForm, summary: &TmSummary, generated_on: NaiveDate) -> RenderContext {
    let mut ctx = RenderContext::new();
    header_fields(&mut ctx, form);

    let rows = summary
        .rows
        .iter()
        .map(|est| {
            let mut row = ContextRow::new();
            row.text("Role", est.row.role.raw());
            row.text("Location", est.row.location.raw());
            row.text("Start Date", est.row.start_date.raw());
            row.text("End Date", est.row.end_date.raw());
            cell_field(&mut row, "Allocation %", &est.row.allocation_pct);
            cell_field(&mut row, "Hrs/Day", &est.row.hours_per_day);
            cell_field(&mut row, "Rate/hr ($)", &est.row.rate);
            row.number("Estimated $", est.estimated.to_f64());
            row
        })
        .collect();
    ctx.table("resources", rows);

    ctx.text("generated_date", long_date(generated_on));
    ctx.text("currency_value_str", summary.total.format_grouped("$"));
    ctx.number("currency_value", summary.total.to_f64());
    ctx
}

fn fixed_fee_context(
    form: &SowForm,
    breakdown: &FixedFeeBreakdown,
    generated_on: NaiveDate,
) -> RenderContext {
    let mut ctx = RenderContext::new();
    header_fields(&mut ctx, form);
    ctx.text("generated_date", long_date(generated_on));

    let rows = breakdown
        .rows
        .iter()
        .map(|payment| {
            let mut row = ContextRow::new();
            row.text("milestone_no", payment.row.milestone_no.raw());
            row.text("services", payment.row.services.raw());
            row.text("due_date", payment.row.due_date.raw());
            cell_field(&mut row, "allocation", &payment.row.allocation);
            row.number("net_pay", payment.net_pay.to_f64());
            row
        })
        .collect();
    ctx.table("milestones", rows);

    ctx.number("milestone_total", breakdown.milestone_total.to_f64());
    ctx.number("Fees", breakdown.total_fees);
    ctx
}

/// The scalar fields shared by the T&M and Fixed Fee contexts
fn header_fields(ctx: &mut RenderContext, form: &SowForm) {
    ctx.text("sow_num", form.sow_num.clone());
    ctx.text("sow_name", form.sow_name.clone());
    ctx.text("pm_client", form.pm_client.clone());
    ctx.text("pm_SP", form.pm_sp.clone());
    ctx.text("mg_client", form.mg_client.clone());
    ctx.text("mg_sp", form.mg_sp.clone());
    ctx.text("ser_del", form.ser_del.clone());
    ctx.text("scope_text", form.scope_text.clone());
    ctx.text("start_date", form.range.start_long());
    ctx.text("end_date", form.range.end_long());
}

/// Emit a cell as a number when it parses, raw text otherwise
fn cell_field(row: &mut ContextRow, key: &str, cell: &Cell) {
    match cell.number() {
        Some(n) => row.number(key, n),
        None => row.text(key, cell.raw()),
    }
}

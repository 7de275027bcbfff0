//! Financial derivation engine
//!
//! Pure functions that turn user-entered dates, rates, and allocations into
//! the monetary figures injected into the generated document. One function
//! per project mode; no I/O, no ambient state.
//!
//! Failure policy: a cell that fails to parse contributes zero to the
//! affected row only. The computation never aborts on malformed input.

use chrono::{Duration, NaiveDate};

use crate::calendar::is_business_day;
use crate::lenient::Cell;
use crate::models::{MilestoneLine, Money, ResourceLine};

/// One T&M resource row with its derived figures
#[derive(Debug, Clone)]
pub struct ResourceEstimate {
    pub row: ResourceLine,
    /// Inclusive Mon-Fri day count over the row's own date range
    pub days: u32,
    /// days x (allocation/100) x hours/day x rate, rounded to cents
    pub estimated: Money,
}

/// Derived figures for a T&M submission
#[derive(Debug, Clone)]
pub struct TmSummary {
    pub rows: Vec<ResourceEstimate>,
    /// Total contract value: sum of all row estimates
    pub total: Money,
}

/// Compute per-row estimates and the total contract value
pub fn derive_time_and_materials(rows: &[ResourceLine]) -> TmSummary {
    let rows: Vec<ResourceEstimate> = rows.iter().map(estimate_row).collect();
    let total = rows.iter().map(|r| r.estimated).sum();
    TmSummary { rows, total }
}

fn estimate_row(row: &ResourceLine) -> ResourceEstimate {
    let days = match (row.start_date.date(), row.end_date.date()) {
        (Some(start), Some(end)) => row_business_days(start, end),
        // Unparseable date: the whole row resolves to zero
        _ => {
            return ResourceEstimate {
                row: row.clone(),
                days: 0,
                estimated: Money::zero(),
            }
        }
    };

    let value = days as f64
        * (row.allocation_pct.number_or_zero() / 100.0)
        * row.hours_per_day.number_or_zero()
        * row.rate.number_or_zero();

    ResourceEstimate {
        row: row.clone(),
        days,
        estimated: Money::from_f64(value),
    }
}

/// Inclusive Mon-Fri count over a row's own range.
///
/// Intentionally independent of `calendar::count_business_days`: the
/// display statistic and the per-row estimate are separate counts.
fn row_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current) {
            count += 1;
        }
        current += Duration::days(1);
    }
    count
}

/// One Fixed Fee milestone row with its derived payment
#[derive(Debug, Clone)]
pub struct MilestonePayment {
    pub row: MilestoneLine,
    /// total_fees x (allocation/100), rounded to cents
    pub net_pay: Money,
}

/// Derived figures for a Fixed Fee submission
#[derive(Debug, Clone)]
pub struct FixedFeeBreakdown {
    /// The total fee as entered (zero when unparseable)
    pub total_fees: f64,
    pub rows: Vec<MilestonePayment>,
    /// Sum of all milestone net payments
    pub milestone_total: Money,
}

/// Compute per-milestone payments and their total
pub fn derive_fixed_fee(total_fees: &Cell, milestones: &[MilestoneLine]) -> FixedFeeBreakdown {
    let fee = total_fees.number_or_zero();

    let rows: Vec<MilestonePayment> = milestones
        .iter()
        .map(|m| MilestonePayment {
            row: m.clone(),
            net_pay: Money::from_f64(fee * m.allocation.number_or_zero() / 100.0),
        })
        .collect();

    let milestone_total = rows.iter().map(|r| r.net_pay).sum();

    FixedFeeBreakdown {
        total_fees: fee,
        rows,
        milestone_total,
    }
}

/// Derived figures for a Change Order submission
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeOrderDelta {
    pub fees_change_order: f64,
    pub fees_original_sow: f64,
    /// change-order fee minus original SOW fee; may be negative, never
    /// clamped, no rounding beyond native float precision
    pub difference: f64,
}

/// Compute the change-order fee delta
pub fn derive_change_order(fees_change_order: &Cell, fees_original_sow: &Cell) -> ChangeOrderDelta {
    let co = fees_change_order.number_or_zero();
    let sow = fees_original_sow.number_or_zero();
    ChangeOrderDelta {
        fees_change_order: co,
        fees_original_sow: sow,
        difference: co - sow,
    }
}

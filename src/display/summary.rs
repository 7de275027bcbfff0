//! Derivation summaries for terminal output

use crate::models::Money;
use crate::services::derivation::{ChangeOrderDelta, MilestonePayment, ResourceEstimate};

use super::truncate;

/// The display-only working-day statistic line
pub fn format_workdays_line(count: u32) -> String {
    format!(
        "Total working days (Mon-Fri) between selected dates: {}",
        count
    )
}

/// The total contract value line
pub fn format_total_line(total: Money, symbol: &str) -> String {
    format!("Total Contract Value: {}", total.format_grouped(symbol))
}

/// Format T&M resource rows as a register
pub fn format_resource_register(rows: &[ResourceEstimate]) -> String {
    if rows.is_empty() {
        return "No resource rows.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:12} {:>5} {:>8} {:>8} {:>10} {:>14}\n",
        "Role", "Location", "Days", "Alloc %", "Hrs/Day", "Rate/hr", "Estimated $"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for est in rows {
        output.push_str(&format!(
            "{:20} {:12} {:>5} {:>8} {:>8} {:>10} {:>14}\n",
            truncate(est.row.role.raw(), 20),
            truncate(est.row.location.raw(), 12),
            est.days,
            truncate(est.row.allocation_pct.raw(), 8),
            truncate(est.row.hours_per_day.raw(), 8),
            truncate(est.row.rate.raw(), 10),
            est.estimated.to_string(),
        ));
    }

    output
}

/// Format Fixed Fee milestone rows as a register
pub fn format_milestone_register(rows: &[MilestonePayment]) -> String {
    if rows.is_empty() {
        return "No milestone rows.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:4} {:30} {:12} {:>8} {:>14}\n",
        "#", "Services", "Due Date", "Alloc %", "Net Pay"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for payment in rows {
        output.push_str(&format!(
            "{:4} {:30} {:12} {:>8} {:>14}\n",
            truncate(payment.row.milestone_no.raw(), 4),
            truncate(payment.row.services.raw(), 30),
            truncate(payment.row.due_date.raw(), 12),
            truncate(payment.row.allocation.raw(), 8),
            payment.net_pay.to_string(),
        ));
    }

    output
}

/// Format the change-order fee comparison
pub fn format_change_order_summary(delta: &ChangeOrderDelta, symbol: &str) -> String {
    format!(
        "Change order fees: {}\nOriginal SOW fees: {}\nDifference:        {}\n",
        Money::from_f64(delta.fees_change_order).format_grouped(symbol),
        Money::from_f64(delta.fees_original_sow).format_grouped(symbol),
        Money::from_f64(delta.difference).format_grouped(symbol),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lenient::Cell;
    use crate::models::{MilestoneLine, ResourceLine};

    #[test]
    fn test_workdays_line() {
        assert_eq!(
            format_workdays_line(21),
            "Total working days (Mon-Fri) between selected dates: 21"
        );
    }

    #[test]
    fn test_total_line() {
        assert_eq!(
            format_total_line(Money::from_cents(400_000), "$"),
            "Total Contract Value: $4,000.00"
        );
    }

    #[test]
    fn test_empty_registers() {
        assert_eq!(format_resource_register(&[]), "No resource rows.\n");
        assert_eq!(format_milestone_register(&[]), "No milestone rows.\n");
    }

    #[test]
    fn test_resource_register_contains_row_values() {
        let rows = vec![ResourceEstimate {
            row: ResourceLine {
                role: Cell::from("Engineer"),
                location: Cell::from("Remote"),
                start_date: Cell::from("2024-01-01"),
                end_date: Cell::from("2024-01-05"),
                allocation_pct: Cell::from("100"),
                hours_per_day: Cell::from("8"),
                rate: Cell::from("100"),
            },
            days: 5,
            estimated: Money::from_cents(400_000),
        }];
        let register = format_resource_register(&rows);
        assert!(register.contains("Engineer"));
        assert!(register.contains("$4,000.00"));
    }

    #[test]
    fn test_milestone_register_contains_row_values() {
        let rows = vec![MilestonePayment {
            row: MilestoneLine {
                milestone_no: Cell::from("1"),
                services: Cell::from("Kickoff"),
                due_date: Cell::from("2025-01-31"),
                allocation: Cell::from("50"),
            },
            net_pay: Money::from_cents(50_000),
        }];
        let register = format_milestone_register(&rows);
        assert!(register.contains("Kickoff"));
        assert!(register.contains("$500.00"));
    }

    #[test]
    fn test_change_order_summary_negative() {
        let delta = ChangeOrderDelta {
            fees_change_order: 100.0,
            fees_original_sow: 150.0,
            difference: -50.0,
        };
        let summary = format_change_order_summary(&delta, "$");
        assert!(summary.contains("-$50.00"));
    }
}

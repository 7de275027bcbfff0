//! Time & Materials resource rows
//!
//! One row per billable resource. Every field is a raw [`Cell`] because rows
//! come straight from a user-editable table: a blank rate or a mistyped date
//! must not fail the submission, it just zeroes that row's estimate.

use serde::{Deserialize, Serialize};

use crate::lenient::Cell;

/// A single resource row from the T&M table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLine {
    /// Role, e.g. "Senior Engineer"
    #[serde(default)]
    pub role: Cell,

    /// Work location
    #[serde(default)]
    pub location: Cell,

    /// Row-level start date (independent of the contract range)
    #[serde(default)]
    pub start_date: Cell,

    /// Row-level end date
    #[serde(default)]
    pub end_date: Cell,

    /// Allocation percentage, 0-100
    #[serde(default)]
    pub allocation_pct: Cell,

    /// Billable hours per day
    #[serde(default)]
    pub hours_per_day: Cell,

    /// Hourly rate in currency units
    #[serde(default)]
    pub rate: Cell,
}

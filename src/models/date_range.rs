//! Contract date range
//!
//! A plain start/end date pair. No ordering is enforced: the original form
//! lets the end date precede the start date, and downstream day counts
//! simply come out as zero for inverted ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar;

/// An inclusive start/end date pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new date range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the end date precedes the start date
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Start date in long document form ("January 05, 2025")
    pub fn start_long(&self) -> String {
        calendar::long_date(self.start)
    }

    /// End date in long document form
    pub fn end_long(&self) -> String {
        calendar::long_date(self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_is_allowed() {
        let range = DateRange::new(date(2025, 2, 1), date(2025, 1, 1));
        assert!(range.is_inverted());
    }

    #[test]
    fn test_long_forms() {
        let range = DateRange::new(date(2025, 1, 5), date(2025, 3, 31));
        assert_eq!(range.start_long(), "January 05, 2025");
        assert_eq!(range.end_long(), "March 31, 2025");
    }

    #[test]
    fn test_serde_round_trip() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 6, 30));
        let yaml = serde_yaml::to_string(&range).unwrap();
        let back: DateRange = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(range, back);
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 6, 30));
        assert_eq!(range.to_string(), "2025-01-01..2025-06-30");
    }
}

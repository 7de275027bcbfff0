//! Calendar arithmetic
//!
//! Working-day counting in the style of Excel's NETWORKDAYS, plus the
//! long-form date formatting used throughout generated documents.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Count business days (Mon-Fri) between two dates, inclusive of both ends.
///
/// An inverted range (`end` before `start`) counts zero days; no error is
/// raised.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sowgen::calendar::count_business_days;
///
/// let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let sun = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(count_business_days(mon, sun), 5);
/// ```
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
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

/// Check whether a date falls on a weekday (ISO weekday 1-5)
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Format a date in the long form used inside generated documents,
/// e.g. "January 05, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

//! Terminal display formatting
//!
//! Plain-text tables and summary lines for the `compute` and `generate`
//! commands, mirroring the working-day and total-value readouts of the
//! original form.

pub mod summary;

pub use summary::{
    format_change_order_summary, format_milestone_register, format_resource_register,
    format_total_line, format_workdays_line,
};

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("a very long role name", 10), "a very ...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("abcdef", 2), "..");
    }
}

//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Derived figures are computed in f64 and land here through
//! [`Money::from_f64`], which rounds half-to-even — the currency-rounding
//! convention applied uniformly across all modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a fractional currency value, rounding
    /// half-to-even to whole cents
    ///
    /// # Examples
    /// ```
    /// use sowgen::models::Money;
    /// assert_eq!(Money::from_f64(4000.0).cents(), 400_000);
    /// assert_eq!(Money::from_f64(0.125).cents(), 12);
    /// assert_eq!(Money::from_f64(0.135).cents(), 14);
    /// ```
    pub fn from_f64(value: f64) -> Self {
        let scaled = value * 100.0;
        let floor = scaled.floor();
        let frac = scaled - floor;
        let cents = if (frac - 0.5).abs() < 1e-9 {
            // Tie: round to the even cent
            let f = floor as i64;
            if f % 2 == 0 {
                f
            } else {
                f + 1
            }
        } else {
            scaled.round() as i64
        };
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a fractional currency value
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol and thousands separators,
    /// e.g. "$1,234,567.89"
    pub fn format_grouped(&self, symbol: &str) -> String {
        let dollars = (self.0 / 100).abs();
        let cents = (self.0 % 100).abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, group_thousands(dollars), cents)
    }
}

/// Insert thousands separators into a non-negative integer
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_grouped("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.to_f64(), 10.5);
    }

    #[test]
    fn test_from_f64_exact() {
        assert_eq!(Money::from_f64(4000.0).cents(), 400_000);
        assert_eq!(Money::from_f64(10.50).cents(), 1050);
        assert_eq!(Money::from_f64(-10.50).cents(), -1050);
    }

    #[test]
    fn test_from_f64_rounds_half_to_even() {
        assert_eq!(Money::from_f64(0.125).cents(), 12);
        assert_eq!(Money::from_f64(0.135).cents(), 14);
        assert_eq!(Money::from_f64(-0.125).cents(), -12);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Money::from_cents(400_000)), "$4,000.00");
        assert_eq!(format!("{}", Money::from_cents(123_456_789)), "$1,234,567.89");
        assert_eq!(format!("{}", Money::from_cents(99)), "$0.99");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_grouped_symbol() {
        assert_eq!(Money::from_cents(100_000).format_grouped("€"), "€1,000.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}

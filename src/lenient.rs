//! Lenient form-cell parsing
//!
//! User-entered table cells arrive as free text. The derivation engine's
//! failure policy is row-local and silent: a cell that does not parse as the
//! expected type contributes zero to the affected figure and the computation
//! carries on. That leniency is deliberate, and it lives here so every
//! consumer applies the same parse-or-default combinator instead of
//! scattering fallback handling.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Date formats accepted for cell values, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];

/// A raw form cell
///
/// Deserializes from any scalar (string, integer, float, boolean, null) so a
/// submission never fails to load on account of a badly-typed cell. Numeric
/// and date interpretation is deferred to the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell(String);

impl Cell {
    /// Create a cell from raw text
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw text as entered
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Whether the cell is blank
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Interpret the cell as a number, if possible
    pub fn number(&self) -> Option<f64> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok()
    }

    /// The parse-or-default combinator: a number, or zero on any failure
    pub fn number_or_zero(&self) -> f64 {
        self.number().unwrap_or(0.0)
    }

    /// Interpret the cell as a calendar date, if possible
    pub fn date(&self) -> Option<NaiveDate> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return None;
        }
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Cell {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Cell {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellVisitor;

        impl<'de> Visitor<'de> for CellVisitor {
            type Value = Cell;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean, or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Cell, E> {
                Ok(Cell(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Cell, E> {
                Ok(Cell(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Cell, E> {
                Ok(Cell(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Cell, E> {
                Ok(Cell(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Cell, E> {
                Ok(Cell(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Cell, E> {
                Ok(Cell(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Cell, E> {
                Ok(Cell::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Cell, E> {
                Ok(Cell::default())
            }

            fn visit_some<D2: Deserializer<'de>>(self, deserializer: D2) -> Result<Cell, D2::Error> {
                Deserialize::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

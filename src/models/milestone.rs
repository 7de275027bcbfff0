//! Fixed Fee milestone rows

use serde::{Deserialize, Serialize};

use crate::lenient::Cell;

/// A single milestone row from the Fixed Fee table
///
/// Field names here are already the machine-safe identifiers required by the
/// template contract (the UI's human labels, "Milestone #", "Services",
/// "Due Date", "Allocation %", are renamed at the import boundary).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilestoneLine {
    /// Sequence label, e.g. "1" or "M1"
    #[serde(default)]
    pub milestone_no: Cell,

    /// Description of the services delivered at this milestone
    #[serde(default)]
    pub services: Cell,

    /// Due date, passed through to the document as entered
    #[serde(default)]
    pub due_date: Cell,

    /// Share of the total fee, 0-100
    #[serde(default)]
    pub allocation: Cell,
}

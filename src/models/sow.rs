//! The SOW submission
//!
//! [`SowForm`] is the explicit, immutable input to the derivation engine:
//! one value per form field, deserialized from a submission file. The engine
//! never reads ambient state, which keeps every computation a pure function
//! of a `SowForm` and a generation date.
//!
//! The three project types are mutually exclusive by construction: the
//! `mode` tag selects exactly one payload, and a submission without a mode
//! fails to deserialize before any computation runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{DateRange, MilestoneLine, ResourceLine};
use crate::lenient::Cell;

/// Project type selector with the mode-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProjectType {
    /// Time & Materials: billing derived from resource-hours
    TimeAndMaterials {
        #[serde(default)]
        resources: Vec<ResourceLine>,
    },

    /// Fixed Fee: milestone-based payments against a total fee
    FixedFee {
        #[serde(default)]
        total_fees: Cell,
        #[serde(default)]
        milestones: Vec<MilestoneLine>,
    },

    /// Change Order: an amendment adjusting fees on an existing SOW
    ChangeOrder {
        /// Reference label of the amendment, e.g. "CO-2"
        #[serde(default)]
        change_ref: String,
        #[serde(default)]
        fees_change_order: Cell,
        #[serde(default)]
        fees_original_sow: Cell,
        /// The original SOW's own date range, alongside the generic range
        sow_range: DateRange,
    },
}

impl ProjectType {
    /// Human-readable mode name
    pub fn name(&self) -> &'static str {
        match self {
            Self::TimeAndMaterials { .. } => "T&M",
            Self::FixedFee { .. } => "Fixed Fee",
            Self::ChangeOrder { .. } => "Change Order",
        }
    }
}

/// A complete SOW form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SowForm {
    /// Client name
    #[serde(default)]
    pub client_name: String,

    /// SOW number, e.g. "1234"
    pub sow_num: String,

    /// SOW name, e.g. "SOW - Implementation"
    pub sow_name: String,

    /// Contract start/end dates
    #[serde(flatten)]
    pub range: DateRange,

    /// Client-side project manager
    #[serde(default)]
    pub pm_client: String,

    /// Service-provider project manager
    #[serde(default)]
    pub pm_sp: String,

    /// Client-side management contact
    #[serde(default)]
    pub mg_client: String,

    /// Service-provider management contact
    #[serde(default)]
    pub mg_sp: String,

    /// Scope / responsibilities text
    #[serde(default)]
    pub scope_text: String,

    /// Services / deliverables text
    #[serde(default)]
    pub ser_del: String,

    /// Mode selector and payload
    #[serde(flatten)]
    pub project: ProjectType,

    /// Optional CSV side file with additional resource rows (T&M)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_csv: Option<PathBuf>,

    /// Optional CSV side file with additional milestone rows (Fixed Fee)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones_csv: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const TM_YAML: &str = r#"
sow_num: "1234"
sow_name: SOW - Implementation
start: 2025-01-06
end: 2025-06-30
pm_client: John Client
pm_sp: Project PM
mode: time_and_materials
resources:
  - role: Engineer
    start_date: 2025-01-06
    end_date: 2025-01-10
    allocation_pct: 100
    hours_per_day: 8
    rate: 100
"#;

    #[test]
    fn test_deserialize_time_and_materials() {
        let form: SowForm = serde_yaml::from_str(TM_YAML).unwrap();
        assert_eq!(form.sow_num, "1234");
        assert_eq!(form.range.start, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        match &form.project {
            ProjectType::TimeAndMaterials { resources } => {
                assert_eq!(resources.len(), 1);
                assert_eq!(resources[0].rate.number(), Some(100.0));
            }
            other => panic!("expected T&M, got {}", other.name()),
        }
    }

    #[test]
    fn test_deserialize_fixed_fee() {
        let yaml = r#"
sow_num: "55"
sow_name: Upgrade
start: 2025-01-01
end: 2025-03-31
mode: fixed_fee
total_fees: 1000
milestones:
  - milestone_no: "1"
    services: Kickoff
    due_date: 2025-01-31
    allocation: 50
"#;
        let form: SowForm = serde_yaml::from_str(yaml).unwrap();
        match &form.project {
            ProjectType::FixedFee { total_fees, milestones } => {
                assert_eq!(total_fees.number(), Some(1000.0));
                assert_eq!(milestones.len(), 1);
            }
            other => panic!("expected Fixed Fee, got {}", other.name()),
        }
    }

    #[test]
    fn test_deserialize_change_order() {
        let yaml = r#"
sow_num: "1234"
sow_name: Amendment
start: 2025-02-01
end: 2025-04-30
mode: change_order
change_ref: CO-2
fees_change_order: 150
fees_original_sow: 100
sow_range:
  start: 2024-07-01
  end: 2025-06-30
"#;
        let form: SowForm = serde_yaml::from_str(yaml).unwrap();
        match &form.project {
            ProjectType::ChangeOrder { change_ref, sow_range, .. } => {
                assert_eq!(change_ref, "CO-2");
                assert_eq!(
                    sow_range.start,
                    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
                );
            }
            other => panic!("expected Change Order, got {}", other.name()),
        }
    }

    #[test]
    fn test_missing_mode_fails_to_deserialize() {
        let yaml = "sow_num: '1'\nsow_name: X\nstart: 2025-01-01\nend: 2025-01-02\n";
        assert!(serde_yaml::from_str::<SowForm>(yaml).is_err());
    }

    #[test]
    fn test_mode_names() {
        let form: SowForm = serde_yaml::from_str(TM_YAML).unwrap();
        assert_eq!(form.project.name(), "T&M");
    }
}

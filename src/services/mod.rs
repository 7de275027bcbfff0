//! Service layer for sowgen
//!
//! The derivation engine and its supporting services: pure financial
//! computation, RenderContext assembly, and CSV row import.

pub mod context;
pub mod derivation;
pub mod import;

pub use context::build_context;
pub use derivation::{
    derive_change_order, derive_fixed_fee, derive_time_and_materials, ChangeOrderDelta,
    FixedFeeBreakdown, MilestonePayment, ResourceEstimate, TmSummary,
};

//! Data models for the Staffing Compliance Engine.
//!
//! This module contains the domain types used throughout the engine:
//! residents and their dependency grades, the dependency census, shift
//! templates, staffing requirements, and compliance/coverage results.

mod calculation_result;
mod census;
mod compliance;
mod coverage;
mod requirement;
mod resident;
mod shift_template;

pub use calculation_result::{RdcCalculationResult, ShiftRdcCalculation};
pub use census::DependencyCensus;
pub use compliance::{ComplianceStatus, ShiftComplianceResult};
pub use coverage::{
    CoverageSummary, DailyCoverageSummary, NonCompliantPeriod, PeriodCoverageReport,
    EXPECTED_HOURS_PER_DAY,
};
pub use requirement::StaffingRequirement;
pub use resident::{DependencyLevel, Resident, ResidentStatus};
pub use shift_template::{ShiftTemplate, ShiftTemplateType};

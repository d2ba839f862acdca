//! Same-day calculation result types.
//!
//! These are the shapes returned by the "what do I need right now" view:
//! one [`ShiftRdcCalculation`] per configured shift template, plus the
//! census the calculation was based on and any data-completeness warnings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::census::DependencyCensus;
use super::requirement::StaffingRequirement;
use super::shift_template::ShiftTemplate;

/// The computed requirement for one shift template on the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRdcCalculation {
    /// The shift template the requirement applies to.
    pub shift_template: ShiftTemplate,
    /// The required-headcount breakdown for this shift.
    pub requirement: StaffingRequirement,
}

impl ShiftRdcCalculation {
    /// Convenience accessor for the legal minimum of this shift.
    pub fn minimum_required(&self) -> u32 {
        self.requirement.minimum_required
    }
}

/// Result of a same-day RDC dimensioning calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdcCalculationResult {
    /// The reference date of the calculation.
    pub date: NaiveDate,
    /// One entry per configured shift template, in roster order.
    pub calculations: Vec<ShiftRdcCalculation>,
    /// Data-completeness warnings (e.g. residents without a grade).
    pub warnings: Vec<String>,
    /// The census the calculation was based on.
    pub total_residents: DependencyCensus,
}

//! Staffing requirement model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The required-headcount breakdown computed for one (shift, census) pair.
///
/// A pure value produced on demand, never persisted by the engine. The
/// per-grade components are kept unrounded so callers can see exactly how
/// the minimum was derived.
///
/// # Invariant
///
/// `minimum_required` equals the sum of the three per-grade components, each
/// ceiled independently, with the Grau I term contributing zero when
/// `applies_grau_i_component` is false. Rounding each grade on its own (and
/// never the sum) is the documented regulatory interpretation of "minimum
/// headcount per grade".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingRequirement {
    /// Caregivers needed for Grau I residents over an 8-hour reference day,
    /// before any workload scaling (`grau_i / grau_i_daily_ratio`).
    pub grau_i_base_daily: Decimal,
    /// Workload multiplier for this shift relative to the 8-hour reference
    /// day (1 for 8h shifts, 1.5 for 12h shifts).
    pub grau_i_workload_factor: Decimal,
    /// Unrounded Grau I caregivers required on this shift; zero unless this
    /// shift carries the daily Grau I component.
    pub grau_i_required_per_shift: Decimal,
    /// Unrounded Grau II caregivers required on this shift.
    pub grau_ii_required_per_shift: Decimal,
    /// Unrounded Grau III caregivers required on this shift.
    pub grau_iii_required_per_shift: Decimal,
    /// True only for the designated shift of the day that absorbs the daily
    /// Grau I requirement, avoiding double-counting across shifts.
    pub applies_grau_i_component: bool,
    /// Legal minimum caregiver headcount for this shift.
    pub minimum_required: u32,
}

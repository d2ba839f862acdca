//! Calculation logic for the Staffing Compliance Engine.
//!
//! This module contains the pure calculation chain: census aggregation,
//! the minimum staffing formula of RDC 502/2021 Art. 16, shift compliance
//! classification, daily coverage folding, and period report building.
//! Every function here is deterministic and side-effect-free; all data is
//! supplied by the caller and no component reads the system clock.

mod census;
mod compliance;
mod daily;
mod report;
mod requirement;
mod shift_calculation;

pub use census::aggregate_census;
pub use compliance::evaluate_compliance;
pub use daily::summarize_day;
pub use report::{build_coverage_report, CoverageDataSource};
pub use requirement::{compute_requirement, REFERENCE_SHIFT_HOURS};
pub use shift_calculation::compute_shift_calculation;

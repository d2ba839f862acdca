//! Same-day shift calculation.
//!
//! The "what do I need right now" view: given a date, a census and the
//! configured shift templates, compute the minimum caregiver requirement for
//! every template at once.

use chrono::NaiveDate;

use crate::config::StaffingRatios;
use crate::error::EngineResult;
use crate::models::{
    DependencyCensus, RdcCalculationResult, ShiftRdcCalculation, ShiftTemplate,
};

use super::requirement::compute_requirement;

/// Computes the per-shift minimum requirements for a single date.
///
/// Every supplied template gets a [`ShiftRdcCalculation`]; the earliest
/// starting one absorbs the daily Grau I component. Data-completeness issues
/// (unclassified residents, an empty roster) are surfaced as warnings while
/// the result is still produced. The date is an explicit parameter: the
/// engine never reads the system clock.
///
/// # Errors
///
/// Propagates [`EngineError::InvalidShiftDuration`] from the requirement
/// calculation; a misconfigured template aborts the whole calculation.
///
/// [`EngineError::InvalidShiftDuration`]: crate::error::EngineError::InvalidShiftDuration
pub fn compute_shift_calculation(
    date: NaiveDate,
    census: &DependencyCensus,
    shift_templates: &[ShiftTemplate],
    ratios: &StaffingRatios,
) -> EngineResult<RdcCalculationResult> {
    let mut calculations = Vec::with_capacity(shift_templates.len());
    for template in shift_templates {
        let requirement = compute_requirement(census, template, shift_templates, ratios)?;
        calculations.push(ShiftRdcCalculation {
            shift_template: template.clone(),
            requirement,
        });
    }

    let mut warnings = Vec::new();
    if census.without_level > 0 {
        warnings.push(format!(
            "{} resident(s) without a dependency grade were excluded from the \
             RDC calculation",
            census.without_level
        ));
    }
    if shift_templates.is_empty() {
        warnings.push(format!("No shift templates configured for {date}"));
    }

    Ok(RdcCalculationResult {
        date,
        calculations,
        warnings,
        total_residents: *census,
    })
}

//! Minimum staffing calculation (RDC 502/2021 Art. 16, II).
//!
//! The regulation sets a *daily* minimum caregiver count for Grau I
//! residents, because one caregiver can reasonably serve that grade across a
//! full working day; Grau II and Grau III minimums are evaluated *per shift*,
//! since those residents require continuous coverage proportional to the
//! shift's own duration.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::StaffingRatios;
use crate::error::EngineResult;
use crate::models::{DependencyCensus, ShiftTemplate, StaffingRequirement};

/// The reference shift length (hours) the Grau I daily ratio is defined for.
pub const REFERENCE_SHIFT_HOURS: u32 = 8;

/// Computes the minimum caregiver requirement for one shift.
///
/// The formula:
/// 1. `grau_i_base_daily = grau_i / grau_i_daily_ratio` for an 8-hour
///    reference day, unrounded.
/// 2. `grau_i_workload_factor = duration_hours / 8` (a 12-hour shift is 1.5
///    reference workload units).
/// 3. The daily Grau I component is applied to exactly one shift per day:
///    the earliest-starting shift in `all_shifts_for_day` (ties broken by
///    id). All other shifts contribute a zero Grau I term, so the same daily
///    requirement is never double-counted.
/// 4. Grau II and Grau III requirements are `count / ratio` per shift.
/// 5. `minimum_required` sums the three terms, each ceiled independently.
///    The sum is never ceiled as a whole: rounding per grade is the
///    documented regulatory interpretation of "minimum headcount per grade".
///
/// Residents without a dependency grade do not enter the formula; the report
/// builders surface them as a warning.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShiftDuration`] when the shift's declared
/// duration is not 8h or 12h, or disagrees with its start/end span. This is
/// fatal: it indicates bad shift configuration upstream.
///
/// [`EngineError::InvalidShiftDuration`]: crate::error::EngineError::InvalidShiftDuration
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::compute_requirement;
/// use staffing_engine::config::StaffingRatios;
/// use staffing_engine::models::{DependencyCensus, ShiftTemplate, ShiftTemplateType};
/// use chrono::NaiveTime;
///
/// let census = DependencyCensus { grau_i: 40, grau_ii: 10, grau_iii: 6, without_level: 0 };
/// let shift = ShiftTemplate {
///     id: "shift_day_8h".to_string(),
///     template_type: ShiftTemplateType::Day8h,
///     name: "Plantão Diurno".to_string(),
///     start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     duration_hours: 8,
/// };
///
/// let requirement = compute_requirement(
///     &census,
///     &shift,
///     std::slice::from_ref(&shift),
///     &StaffingRatios::rdc_502_defaults(),
/// ).unwrap();
/// assert_eq!(requirement.minimum_required, 4);
/// ```
pub fn compute_requirement(
    census: &DependencyCensus,
    shift: &ShiftTemplate,
    all_shifts_for_day: &[ShiftTemplate],
    ratios: &StaffingRatios,
) -> EngineResult<StaffingRequirement> {
    shift.validate()?;

    let grau_i_base_daily = Decimal::from(census.grau_i) / ratios.grau_i_daily_ratio;
    let grau_i_workload_factor =
        Decimal::from(shift.duration_hours) / Decimal::from(REFERENCE_SHIFT_HOURS);

    let applies_grau_i_component = carries_daily_grau_i(shift, all_shifts_for_day);
    let grau_i_required_per_shift = if applies_grau_i_component {
        grau_i_base_daily * grau_i_workload_factor
    } else {
        Decimal::ZERO
    };

    let grau_ii_required_per_shift = Decimal::from(census.grau_ii) / ratios.grau_ii_ratio;
    let grau_iii_required_per_shift = Decimal::from(census.grau_iii) / ratios.grau_iii_ratio;

    let minimum_required = ceil_headcount(grau_i_required_per_shift)
        + ceil_headcount(grau_ii_required_per_shift)
        + ceil_headcount(grau_iii_required_per_shift);

    Ok(StaffingRequirement {
        grau_i_base_daily,
        grau_i_workload_factor,
        grau_i_required_per_shift,
        grau_ii_required_per_shift,
        grau_iii_required_per_shift,
        applies_grau_i_component,
        minimum_required,
    })
}

/// Whether this shift is the day's designated carrier of the Grau I daily
/// component: the earliest-starting shift, ties broken by id so the choice
/// is deterministic regardless of roster order.
///
/// An empty `all_shifts_for_day` means the shift is evaluated in isolation
/// and carries the component itself.
fn carries_daily_grau_i(shift: &ShiftTemplate, all_shifts_for_day: &[ShiftTemplate]) -> bool {
    all_shifts_for_day
        .iter()
        .min_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.id.cmp(&b.id))
        })
        .is_none_or(|anchor| anchor.id == shift.id)
}

/// Ceils an unrounded per-grade requirement to a whole headcount.
///
/// The input is always non-negative (census counts divided by validated
/// positive ratios), so the conversion cannot fail.
fn ceil_headcount(required: Decimal) -> u32 {
    required.ceil().to_u32().unwrap_or(0)
}

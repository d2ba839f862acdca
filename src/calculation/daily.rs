//! Daily coverage folding.
//!
//! Folds the compliance results of one calendar date into a
//! [`DailyCoverageSummary`]: compliant shifts contribute their span to the
//! covered hours, under-staffed shifts are recorded as non-compliant periods
//! and their span counts as uncovered time.

use chrono::NaiveDate;

use crate::models::{
    ComplianceStatus, DailyCoverageSummary, NonCompliantPeriod, ShiftComplianceResult,
    ShiftTemplate, EXPECTED_HOURS_PER_DAY,
};

/// Folds one day's shift results into a coverage summary.
///
/// - `covered_hours` sums the durations of shifts classified compliant,
///   clamped at 24: overlapping shift templates are a configuration anomaly
///   this fold does not deduplicate beyond straightforward clamping.
/// - Shifts classified `attention` or `non_compliant` land in
///   `non_compliant_periods` and their span counts as uncovered.
/// - The day takes the worst status among its shifts; a day with no shifts
///   at all is `non_compliant` (24 uncovered hours, no periods to list).
///
/// Entries are expected in roster order; the produced periods preserve it.
pub fn summarize_day(
    date: NaiveDate,
    entries: &[(ShiftTemplate, ShiftComplianceResult)],
) -> DailyCoverageSummary {
    let mut covered_hours = 0u32;
    let mut non_compliant_periods = Vec::new();

    for (template, result) in entries {
        match result.compliance_status {
            ComplianceStatus::Compliant => covered_hours += template.duration_hours,
            ComplianceStatus::Attention | ComplianceStatus::NonCompliant => {
                non_compliant_periods.push(NonCompliantPeriod {
                    shift_template_name: template.name.clone(),
                    start_time: template.start_time,
                    end_time: template.end_time,
                    compliance_status: result.compliance_status,
                    assigned_count: result.assigned_count,
                    minimum_required: result.minimum_required,
                });
            }
        }
    }

    let covered_hours = covered_hours.min(EXPECTED_HOURS_PER_DAY);

    let compliance_status = entries
        .iter()
        .map(|(_, result)| result.compliance_status)
        .max()
        .unwrap_or(ComplianceStatus::NonCompliant);

    DailyCoverageSummary {
        date,
        expected_hours: EXPECTED_HOURS_PER_DAY,
        covered_hours,
        uncovered_hours: EXPECTED_HOURS_PER_DAY - covered_hours,
        compliance_status,
        non_compliant_periods,
    }
}

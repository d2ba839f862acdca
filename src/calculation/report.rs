//! Coverage period aggregation.
//!
//! Replays the census -> requirement -> compliance chain across a calendar
//! range and a facility's full shift roster, producing daily summaries and a
//! period-level report with an overall hourly coverage rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::StaffingRatios;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ComplianceStatus, CoverageSummary, DependencyCensus, PeriodCoverageReport,
    ShiftComplianceResult, ShiftTemplate, EXPECTED_HOURS_PER_DAY,
};

use super::compliance::evaluate_compliance;
use super::daily::summarize_day;
use super::requirement::compute_requirement;

/// The seam to the external data layer.
///
/// Implementations adapt whatever persistence the host application uses
/// (resident repository, shift roster, team assignments) into the per-date
/// queries the report builder needs. The engine performs no I/O of its own;
/// retries and timeouts around data fetching belong to the implementor.
pub trait CoverageDataSource {
    /// The dependency census for a date, or `None` when no census data
    /// exists (reported as a warning, not an error).
    fn census_for(&self, date: NaiveDate) -> Option<DependencyCensus>;

    /// The active shifts of a date with their assigned caregiver counts,
    /// in roster order.
    fn assignments_for(&self, date: NaiveDate) -> Vec<(ShiftTemplate, u32)>;
}

/// Builds a compliance coverage report for `[start_date, end_date]`.
///
/// Per date: the census and shift assignments are fetched from `source`,
/// every shift gets its minimum computed and its staffing classified, and
/// the results are folded into a [`DailyCoverageSummary`] and rolled up into
/// the period summary.
///
/// The report is best-effort: a missing census is treated as an all-zero
/// census plus a warning, days with unclassified residents or no configured
/// shifts add warnings, and the report is still produced. The only fatal
/// conditions are an inverted date range and an invalid shift duration
/// (which means shift configuration must be fixed before any report can be
/// trusted).
///
/// [`DailyCoverageSummary`]: crate::models::DailyCoverageSummary
pub fn build_coverage_report(
    start_date: NaiveDate,
    end_date: NaiveDate,
    source: &dyn CoverageDataSource,
    ratios: &StaffingRatios,
) -> EngineResult<PeriodCoverageReport> {
    if end_date < start_date {
        return Err(EngineError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    let mut days = Vec::new();
    let mut shifts = Vec::new();
    let mut warnings = Vec::new();

    for date in start_date.iter_days().take_while(|d| *d <= end_date) {
        let census = match source.census_for(date) {
            Some(census) => census,
            None => {
                warnings.push(format!(
                    "No census data for {date}; treated as zero residents"
                ));
                DependencyCensus::default()
            }
        };

        if census.without_level > 0 {
            warnings.push(format!(
                "{} resident(s) without a dependency grade on {date} were excluded \
                 from the RDC calculation",
                census.without_level
            ));
        }

        let assignments = source.assignments_for(date);
        if assignments.is_empty() {
            warnings.push(format!(
                "No shifts configured for {date}; the full day counts as uncovered"
            ));
        }

        let roster: Vec<ShiftTemplate> = assignments
            .iter()
            .map(|(template, _)| template.clone())
            .collect();

        let mut day_entries = Vec::with_capacity(assignments.len());
        for (template, assigned_count) in assignments {
            let requirement = compute_requirement(&census, &template, &roster, ratios)?;
            let compliance_status = evaluate_compliance(
                requirement.minimum_required,
                assigned_count,
                ratios.attention_margin,
            );

            let result = ShiftComplianceResult {
                shift_template_id: template.id.clone(),
                date,
                minimum_required: requirement.minimum_required,
                assigned_count,
                compliance_status,
            };

            shifts.push(result.clone());
            day_entries.push((template, result));
        }

        days.push(summarize_day(date, &day_entries));
    }

    let summary = roll_up(&days, &shifts);

    Ok(PeriodCoverageReport {
        start_date,
        end_date,
        days,
        shifts,
        summary,
        warnings,
    })
}

/// Rolls daily summaries and shift results up into the period summary.
fn roll_up(
    days: &[crate::models::DailyCoverageSummary],
    shifts: &[ShiftComplianceResult],
) -> CoverageSummary {
    let count_shifts = |status: ComplianceStatus| {
        shifts
            .iter()
            .filter(|s| s.compliance_status == status)
            .count() as u32
    };
    let count_days = |status: ComplianceStatus| {
        days.iter()
            .filter(|d| d.compliance_status == status)
            .count() as u32
    };

    let total_days = days.len() as u32;
    let total_covered_hours = days.iter().map(|d| d.covered_hours).sum();
    let expected_hours = total_days * EXPECTED_HOURS_PER_DAY;

    let hourly_coverage_rate = if expected_hours == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(total_covered_hours) / Decimal::from(expected_hours)
    };

    CoverageSummary {
        total_shifts: shifts.len() as u32,
        compliant_shifts: count_shifts(ComplianceStatus::Compliant),
        attention_shifts: count_shifts(ComplianceStatus::Attention),
        non_compliant_shifts: count_shifts(ComplianceStatus::NonCompliant),
        total_days,
        compliant_days: count_days(ComplianceStatus::Compliant),
        attention_days: count_days(ComplianceStatus::Attention),
        non_compliant_days: count_days(ComplianceStatus::NonCompliant),
        total_covered_hours,
        expected_hours,
        hourly_coverage_rate,
    }
}

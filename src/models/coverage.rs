//! Daily and period coverage report types.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::compliance::{ComplianceStatus, ShiftComplianceResult};
use super::shift_template::hhmm;

/// Hours of care coverage a calendar day is expected to have.
pub const EXPECTED_HOURS_PER_DAY: u32 = 24;

/// A sub-day time window whose staffing fell short of the legal minimum.
///
/// Recorded for every shift classified `attention` or `non_compliant`; its
/// span counts as uncovered time in the daily summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonCompliantPeriod {
    /// Display name of the under-staffed shift.
    pub shift_template_name: String,
    /// Wall-clock start of the window.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Wall-clock end of the window.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// How the shift was classified.
    pub compliance_status: ComplianceStatus,
    /// Caregivers actually assigned.
    pub assigned_count: u32,
    /// Legal minimum for the shift.
    pub minimum_required: u32,
}

/// Coverage summary for one calendar date.
///
/// # Invariant
///
/// `covered_hours + uncovered_hours == expected_hours` (24). Covered hours
/// are the summed durations of compliant shifts, clamped at 24 when
/// overlapping templates would otherwise double-count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCoverageSummary {
    /// The summarized date.
    pub date: NaiveDate,
    /// Always 24; serialized so report consumers need no constant of their own.
    pub expected_hours: u32,
    /// Hours covered by shifts staffed at or above minimum.
    pub covered_hours: u32,
    /// Hours not covered at the legal minimum.
    pub uncovered_hours: u32,
    /// Worst status among the day's shifts; `non_compliant` when the day has
    /// no shifts configured at all.
    pub compliance_status: ComplianceStatus,
    /// The under-staffed windows of the day, in roster order.
    pub non_compliant_periods: Vec<NonCompliantPeriod>,
}

/// Rolled-up counts and totals for a coverage period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    /// Shifts evaluated across the period.
    pub total_shifts: u32,
    /// Shifts classified compliant.
    pub compliant_shifts: u32,
    /// Shifts classified attention.
    pub attention_shifts: u32,
    /// Shifts classified non-compliant.
    pub non_compliant_shifts: u32,
    /// Days in the period.
    pub total_days: u32,
    /// Days whose worst shift status was compliant.
    pub compliant_days: u32,
    /// Days whose worst shift status was attention.
    pub attention_days: u32,
    /// Days with a non-compliant shift or no shifts at all.
    pub non_compliant_days: u32,
    /// Hours covered at or above minimum across the period.
    pub total_covered_hours: u32,
    /// `total_days * 24`.
    pub expected_hours: u32,
    /// `total_covered_hours / expected_hours`.
    pub hourly_coverage_rate: Decimal,
}

/// Compliance report for a date range.
///
/// Always best-effort: data-completeness problems surface in `warnings`
/// while the report is still produced. Only a shift-configuration error
/// aborts the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCoverageReport {
    /// First date of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the period (inclusive).
    pub end_date: NaiveDate,
    /// One summary per date, in calendar order.
    pub days: Vec<DailyCoverageSummary>,
    /// Every evaluated shift across the period, in calendar then roster order.
    pub shifts: Vec<ShiftComplianceResult>,
    /// Rolled-up totals.
    pub summary: CoverageSummary,
    /// Human-readable data-completeness notes (missing census, unclassified
    /// residents, days without configured shifts).
    pub warnings: Vec<String>,
}

//! Request types for the Staffing Compliance Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/coverage-report` endpoints. Because the engine performs no I/O, both
//! endpoints receive their census and assignment data inline; the coverage
//! request adapts into the [`CoverageDataSource`] seam the report builder
//! consumes.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::CoverageDataSource;
use crate::calculation::aggregate_census;
use crate::models::{DependencyCensus, Resident, ShiftTemplate};

/// Request body for the `/calculate` endpoint.
///
/// Carries the reference date, the facility's residents and the configured
/// shift templates for a same-day dimensioning calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCalculationRequest {
    /// The reference date of the calculation.
    pub date: NaiveDate,
    /// The facility's residents (active and inactive; the engine filters).
    pub residents: Vec<Resident>,
    /// The configured shift templates.
    pub shift_templates: Vec<ShiftTemplate>,
}

/// One shift with its assigned caregiver count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignmentRequest {
    /// The shift template.
    pub template: ShiftTemplate,
    /// Caregivers assigned to the shift on that date.
    pub assigned_count: u32,
}

/// Per-date data for a coverage report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDayRequest {
    /// The date this entry covers.
    pub date: NaiveDate,
    /// Residents on that date; `null` when no census data exists (the
    /// report records a warning and assumes zero residents).
    #[serde(default)]
    pub residents: Option<Vec<Resident>>,
    /// The staffed shifts of the date, in roster order.
    #[serde(default)]
    pub shifts: Vec<ShiftAssignmentRequest>,
}

/// Request body for the `/coverage-report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReportRequest {
    /// First date of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the period (inclusive).
    pub end_date: NaiveDate,
    /// Per-date census and assignment data. Dates of the period missing
    /// from this list count as having no census and no shifts.
    #[serde(default)]
    pub days: Vec<CoverageDayRequest>,
}

/// A [`CoverageDataSource`] over the inline data of a coverage request.
pub(super) struct RequestDataSource {
    days: HashMap<NaiveDate, CoverageDayRequest>,
}

impl CoverageReportRequest {
    /// Adapts the request into the data-source seam of the report builder.
    pub(super) fn into_data_source(self) -> RequestDataSource {
        RequestDataSource {
            days: self.days.into_iter().map(|day| (day.date, day)).collect(),
        }
    }
}

impl CoverageDataSource for RequestDataSource {
    fn census_for(&self, date: NaiveDate) -> Option<DependencyCensus> {
        self.days
            .get(&date)
            .and_then(|day| day.residents.as_deref())
            .map(aggregate_census)
    }

    fn assignments_for(&self, date: NaiveDate) -> Vec<(ShiftTemplate, u32)> {
        self.days
            .get(&date)
            .map(|day| {
                day.shifts
                    .iter()
                    .map(|shift| (shift.template.clone(), shift.assigned_count))
                    .collect()
            })
            .unwrap_or_default()
    }
}

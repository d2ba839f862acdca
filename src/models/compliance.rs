//! Shift compliance result types.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Compliance classification of a staffed shift against its legal minimum.
///
/// Statuses are ordered by severity: `Compliant < Attention < NonCompliant`.
/// The ordering is what lets a day take the worst status of its shifts.
///
/// # Example
///
/// ```
/// use staffing_engine::models::ComplianceStatus;
///
/// assert!(ComplianceStatus::NonCompliant > ComplianceStatus::Attention);
/// assert!(ComplianceStatus::Attention > ComplianceStatus::Compliant);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Assigned headcount meets or exceeds the legal minimum.
    Compliant,
    /// One caregiver short of the legal minimum; operationally recoverable,
    /// flagged for action.
    Attention,
    /// Below the attention margin, or unstaffed while a minimum applies.
    NonCompliant,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::Attention => write!(f, "attention"),
            ComplianceStatus::NonCompliant => write!(f, "non_compliant"),
        }
    }
}

/// Compliance evaluation of a single shift on a single date.
///
/// Created per evaluation call, never stored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftComplianceResult {
    /// The template of the evaluated shift.
    pub shift_template_id: String,
    /// The calendar date the shift covers.
    pub date: NaiveDate,
    /// Legal minimum caregiver headcount for the shift.
    pub minimum_required: u32,
    /// Caregivers actually assigned (from team-membership records).
    pub assigned_count: u32,
    /// Resulting classification.
    pub compliance_status: ComplianceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_severity_ordering() {
        assert!(ComplianceStatus::Compliant < ComplianceStatus::Attention);
        assert!(ComplianceStatus::Attention < ComplianceStatus::NonCompliant);
        assert_eq!(
            [
                ComplianceStatus::Attention,
                ComplianceStatus::Compliant,
                ComplianceStatus::NonCompliant,
            ]
            .into_iter()
            .max(),
            Some(ComplianceStatus::NonCompliant)
        );
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(ComplianceStatus::NonCompliant).unwrap(),
            "non_compliant"
        );
        assert_eq!(
            serde_json::to_value(ComplianceStatus::Compliant).unwrap(),
            "compliant"
        );
    }

    #[test]
    fn test_display_matches_wire_format() {
        for status in [
            ComplianceStatus::Compliant,
            ComplianceStatus::Attention,
            ComplianceStatus::NonCompliant,
        ] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, status.to_string());
        }
    }

    #[test]
    fn test_shift_compliance_result_serialization() {
        let result = ShiftComplianceResult {
            shift_template_id: "shift_day_8h".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            minimum_required: 4,
            assigned_count: 3,
            compliance_status: ComplianceStatus::Attention,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["shiftTemplateId"], "shift_day_8h");
        assert_eq!(json["date"], "2026-02-01");
        assert_eq!(json["minimumRequired"], 4);
        assert_eq!(json["assignedCount"], 3);
        assert_eq!(json["complianceStatus"], "attention");
    }
}

//! Shift compliance classification.

use crate::models::ComplianceStatus;

/// Classifies an assigned headcount against the computed legal minimum.
///
/// Classification rule, applied in order:
/// - `minimum_required == 0` is always [`ComplianceStatus::Compliant`]: with
///   no requirement there is nothing to violate, whatever the headcount.
/// - `assigned_count >= minimum_required` is compliant.
/// - Within `attention_margin` caregivers of the minimum is
///   [`ComplianceStatus::Attention`]: short of the legal minimum but
///   operationally recoverable, flagged for action.
/// - Anything below that is [`ComplianceStatus::NonCompliant`].
///
/// The margin (one caregiver under RDC 502/2021 practice) comes from
/// configuration, not a literal. `assigned_count` is supplied by the caller
/// from team-membership records and is never negative by construction.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::evaluate_compliance;
/// use staffing_engine::models::ComplianceStatus;
///
/// assert_eq!(evaluate_compliance(4, 4, 1), ComplianceStatus::Compliant);
/// assert_eq!(evaluate_compliance(4, 3, 1), ComplianceStatus::Attention);
/// assert_eq!(evaluate_compliance(4, 2, 1), ComplianceStatus::NonCompliant);
/// ```
pub fn evaluate_compliance(
    minimum_required: u32,
    assigned_count: u32,
    attention_margin: u32,
) -> ComplianceStatus {
    if minimum_required == 0 || assigned_count >= minimum_required {
        ComplianceStatus::Compliant
    } else if assigned_count + attention_margin >= minimum_required {
        ComplianceStatus::Attention
    } else {
        ComplianceStatus::NonCompliant
    }
}

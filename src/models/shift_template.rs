//! Shift template model.
//!
//! A shift template describes a recurring daily time window a facility
//! staffs (e.g. 07:00-15:00). Templates are owned by the external tenant
//! shift configuration; the engine treats them as read-only input and
//! validates the duration invariant before any calculation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Serde helpers for `HH:mm` wall-clock times, matching the wire format the
/// shift configuration uses (`"07:00"` rather than `"07:00:00"`).
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// The recurring shift slots RDC-regulated facilities schedule against.
///
/// Facilities run either three 8-hour shifts or two 12-hour shifts per day
/// (or a mix); each slot may be enabled, disabled or renamed per tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftTemplateType {
    /// Morning 8-hour shift (canonically 07:00-15:00).
    #[serde(rename = "DAY_8H")]
    Day8h,
    /// Afternoon 8-hour shift (canonically 15:00-23:00).
    #[serde(rename = "AFTERNOON_8H")]
    Afternoon8h,
    /// Overnight 8-hour shift (canonically 23:00-07:00).
    #[serde(rename = "NIGHT_8H")]
    Night8h,
    /// Daytime 12-hour shift (canonically 07:00-19:00).
    #[serde(rename = "DAY_12H")]
    Day12h,
    /// Overnight 12-hour shift (canonically 19:00-07:00).
    #[serde(rename = "NIGHT_12H")]
    Night12h,
}

/// Shift durations the regulation defines staffing ratios for.
const RECOGNIZED_DURATIONS: [u32; 2] = [8, 12];

/// A recurring shift slot a facility may staff.
///
/// # Invariant
///
/// `duration_hours` must equal the wall-clock span between `start_time` and
/// `end_time`, accounting for midnight wraparound when the end time is at or
/// before the start time. [`ShiftTemplate::validate`] enforces this together
/// with the recognized-duration check.
///
/// # Example
///
/// ```
/// use staffing_engine::models::{ShiftTemplate, ShiftTemplateType};
/// use chrono::NaiveTime;
///
/// let night = ShiftTemplate {
///     id: "shift_night_12h".to_string(),
///     template_type: ShiftTemplateType::Night12h,
///     name: "Plantão Noturno".to_string(),
///     start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     duration_hours: 12,
/// };
/// assert!(night.crosses_midnight());
/// assert!(night.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTemplate {
    /// Unique identifier for the template.
    pub id: String,
    /// Which canonical slot this template fills.
    #[serde(rename = "type")]
    pub template_type: ShiftTemplateType,
    /// Tenant-facing display name (e.g. "Plantão Diurno").
    pub name: String,
    /// Wall-clock start time.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Wall-clock end time. At or before `start_time` means the shift
    /// crosses midnight.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Declared shift length in hours (8 or 12).
    pub duration_hours: u32,
}

impl ShiftTemplate {
    /// Returns true if the shift ends on the following calendar day.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Wall-clock span of the shift in minutes, with midnight wraparound.
    ///
    /// A template whose end equals its start spans a full 24 hours; the
    /// duration invariant rejects that case separately.
    pub fn span_minutes(&self) -> i64 {
        const MINUTES_PER_DAY: i64 = 24 * 60;
        let naive = (self.end_time - self.start_time).num_minutes();
        if self.crosses_midnight() {
            naive + MINUTES_PER_DAY
        } else {
            naive
        }
    }

    /// Checks the duration invariant.
    ///
    /// Fails with [`EngineError::InvalidShiftDuration`] when the declared
    /// duration is not a recognized shift length, or disagrees with the
    /// wall-clock span of `start_time..end_time`.
    pub fn validate(&self) -> EngineResult<()> {
        if !RECOGNIZED_DURATIONS.contains(&self.duration_hours) {
            return Err(EngineError::InvalidShiftDuration {
                shift_id: self.id.clone(),
                message: format!(
                    "duration {}h is not a recognized shift length (expected 8h or 12h)",
                    self.duration_hours
                ),
            });
        }

        let span = self.span_minutes();
        if i64::from(self.duration_hours) * 60 != span {
            return Err(EngineError::InvalidShiftDuration {
                shift_id: self.id.clone(),
                message: format!(
                    "declared duration {}h does not match the {}-{} span ({} minutes)",
                    self.duration_hours,
                    self.start_time.format("%H:%M"),
                    self.end_time.format("%H:%M"),
                    span
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn template(
        id: &str,
        template_type: ShiftTemplateType,
        start: NaiveTime,
        end: NaiveTime,
        duration: u32,
    ) -> ShiftTemplate {
        ShiftTemplate {
            id: id.to_string(),
            template_type,
            name: id.to_string(),
            start_time: start,
            end_time: end,
            duration_hours: duration,
        }
    }

    #[test]
    fn test_day_shift_span() {
        let day = template(
            "day_8h",
            ShiftTemplateType::Day8h,
            time(7, 0),
            time(15, 0),
            8,
        );
        assert_eq!(day.span_minutes(), 480);
        assert!(!day.crosses_midnight());
        assert!(day.validate().is_ok());
    }

    #[test]
    fn test_overnight_span_wraps_around_midnight() {
        let night = template(
            "night_8h",
            ShiftTemplateType::Night8h,
            time(23, 0),
            time(7, 0),
            8,
        );
        assert_eq!(night.span_minutes(), 480);
        assert!(night.crosses_midnight());
        assert!(night.validate().is_ok());
    }

    #[test]
    fn test_overnight_12h_span() {
        let night = template(
            "night_12h",
            ShiftTemplateType::Night12h,
            time(19, 0),
            time(7, 0),
            12,
        );
        assert_eq!(night.span_minutes(), 720);
        assert!(night.validate().is_ok());
    }

    #[test]
    fn test_unrecognized_duration_is_rejected() {
        let bad = template(
            "short",
            ShiftTemplateType::Day8h,
            time(7, 0),
            time(13, 0),
            6,
        );
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("not a recognized shift length"));
    }

    #[test]
    fn test_duration_disagreeing_with_span_is_rejected() {
        // Declared 8h but the window spans 12h.
        let bad = template(
            "mislabeled",
            ShiftTemplateType::Day8h,
            time(7, 0),
            time(19, 0),
            8,
        );
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_zero_length_window_is_rejected() {
        // start == end reads as a 24h wraparound span, never valid.
        let bad = template(
            "zero",
            ShiftTemplateType::Day8h,
            time(7, 0),
            time(7, 0),
            8,
        );
        assert_eq!(bad.span_minutes(), 1440);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_serialization_uses_hhmm_and_wire_type_names() {
        let day = template(
            "shift_day_8h",
            ShiftTemplateType::Day8h,
            time(7, 0),
            time(15, 0),
            8,
        );
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["type"], "DAY_8H");
        assert_eq!(json["startTime"], "07:00");
        assert_eq!(json["endTime"], "15:00");
        assert_eq!(json["durationHours"], 8);
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "id": "shift_night_12h",
            "type": "NIGHT_12H",
            "name": "Plantão Noturno",
            "startTime": "19:00",
            "endTime": "07:00",
            "durationHours": 12
        }"#;

        let shift: ShiftTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(shift.template_type, ShiftTemplateType::Night12h);
        assert_eq!(shift.start_time, time(19, 0));
        assert!(shift.crosses_midnight());
        assert!(shift.validate().is_ok());
    }
}

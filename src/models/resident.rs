//! Resident model and dependency grade types.
//!
//! Residents are classified into care-dependency grades per RDC 502/2021.
//! The grade drives the caregiver dimensioning formula: the higher the grade,
//! the more caregivers per resident the regulation requires.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Care-dependency grade of a resident (RDC 502/2021 Art. 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyLevel {
    /// Grau I - independent residents, lowest care intensity.
    #[serde(rename = "Grau I")]
    GrauI,
    /// Grau II - residents needing assistance in up to three daily activities.
    #[serde(rename = "Grau II")]
    GrauII,
    /// Grau III - residents needing assistance in all daily activities.
    #[serde(rename = "Grau III")]
    GrauIII,
}

impl DependencyLevel {
    /// Classifies a free-form grade string, tolerating case and surrounding
    /// text (e.g. "Grau II - Dependência parcial").
    ///
    /// Returns `None` for unrecognized values; the census aggregator counts
    /// those residents as unclassified rather than failing.
    pub fn classify(value: &str) -> Option<Self> {
        let normalized = value.to_lowercase();
        let rest = normalized.split("grau").nth(1)?.trim_start();

        // The numeral must be a whole token: "grau iv" may not read as
        // "grau i".
        let numeral_len = rest.chars().take_while(|c| *c == 'i').count();
        if rest.chars().nth(numeral_len).is_some_and(|c| c.is_alphanumeric()) {
            return None;
        }

        match numeral_len {
            1 => Some(DependencyLevel::GrauI),
            2 => Some(DependencyLevel::GrauII),
            3 => Some(DependencyLevel::GrauIII),
            _ => None,
        }
    }
}

impl FromStr for DependencyLevel {
    type Err = EngineError;

    /// Strict parse for typed boundaries; unrecognized values are a
    /// configuration error, never silently coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s).ok_or_else(|| EngineError::UnknownDependencyGrade {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for DependencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyLevel::GrauI => write!(f, "Grau I"),
            DependencyLevel::GrauII => write!(f, "Grau II"),
            DependencyLevel::GrauIII => write!(f, "Grau III"),
        }
    }
}

/// Administrative status of a resident.
///
/// Only active residents enter the dimensioning calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidentStatus {
    /// Currently living in the facility.
    #[serde(rename = "Ativo")]
    Active,
    /// Discharged, deceased or otherwise no longer in the facility.
    #[serde(rename = "Inativo")]
    Inactive,
}

impl ResidentStatus {
    /// Returns true if the resident counts toward the census.
    pub fn is_active(&self) -> bool {
        matches!(self, ResidentStatus::Active)
    }
}

/// A facility resident, as supplied by the external resident repository.
///
/// The dependency level is carried as the raw stored string: upstream data
/// may contain display suffixes or legacy values, and the census aggregator
/// is responsible for bucketing unrecognized ones as unclassified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    /// Unique identifier for the resident.
    pub id: String,
    /// Raw dependency grade value, if the resident was ever assessed.
    #[serde(default)]
    pub dependency_level: Option<String>,
    /// Administrative status.
    pub status: ResidentStatus,
}

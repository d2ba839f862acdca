//! Dependency census model.

use serde::{Deserialize, Serialize};

use super::DependencyLevel;

/// Count of active residents per care-dependency grade on a reference date.
///
/// An immutable snapshot produced fresh per calculation call. Residents whose
/// grade was never assessed (or could not be recognized) are counted in
/// `without_level`; they are excluded from the dimensioning formula but
/// surfaced as a warning by the report builders.
///
/// # Example
///
/// ```
/// use staffing_engine::models::DependencyCensus;
///
/// let census = DependencyCensus {
///     grau_i: 40,
///     grau_ii: 10,
///     grau_iii: 6,
///     without_level: 0,
/// };
/// assert_eq!(census.total(), 56);
/// assert_eq!(census.classified_total(), 56);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyCensus {
    /// Active residents classified as Grau I.
    pub grau_i: u32,
    /// Active residents classified as Grau II.
    #[serde(rename = "grauII")]
    pub grau_ii: u32,
    /// Active residents classified as Grau III.
    #[serde(rename = "grauIII")]
    pub grau_iii: u32,
    /// Active residents without a recognized dependency grade.
    pub without_level: u32,
}

impl DependencyCensus {
    /// Returns the total number of active residents, classified or not.
    pub fn total(&self) -> u32 {
        self.grau_i + self.grau_ii + self.grau_iii + self.without_level
    }

    /// Returns the number of residents that enter the dimensioning formula.
    pub fn classified_total(&self) -> u32 {
        self.grau_i + self.grau_ii + self.grau_iii
    }

    /// Returns true if no resident is counted in any bucket.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns the count for a specific dependency grade.
    pub fn count_for(&self, level: DependencyLevel) -> u32 {
        match level {
            DependencyLevel::GrauI => self.grau_i,
            DependencyLevel::GrauII => self.grau_ii,
            DependencyLevel::GrauIII => self.grau_iii,
        }
    }
}

//! Census aggregation.
//!
//! Reduces a list of residents into per-grade counts for a reference date.
//! This is the first stage of the calculation chain; everything downstream
//! consumes the [`DependencyCensus`] snapshot produced here.

use crate::models::{DependencyCensus, DependencyLevel, Resident};

/// Aggregates active residents into a dependency census.
///
/// Only residents with active status are counted. Residents without a
/// dependency grade, or with a grade string that cannot be recognized, are
/// counted in `without_level`; they are excluded from the staffing formula
/// but reported as a warning by the report builders.
///
/// A pure function of its input: an empty list yields an all-zero census,
/// not an error.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::aggregate_census;
/// use staffing_engine::models::{Resident, ResidentStatus};
///
/// let residents = vec![
///     Resident {
///         id: "res_001".to_string(),
///         dependency_level: Some("Grau II".to_string()),
///         status: ResidentStatus::Active,
///     },
///     Resident {
///         id: "res_002".to_string(),
///         dependency_level: None,
///         status: ResidentStatus::Active,
///     },
/// ];
///
/// let census = aggregate_census(&residents);
/// assert_eq!(census.grau_ii, 1);
/// assert_eq!(census.without_level, 1);
/// ```
pub fn aggregate_census(residents: &[Resident]) -> DependencyCensus {
    let mut census = DependencyCensus::default();

    for resident in residents {
        if !resident.status.is_active() {
            continue;
        }

        let level = resident
            .dependency_level
            .as_deref()
            .and_then(DependencyLevel::classify);

        match level {
            Some(DependencyLevel::GrauI) => census.grau_i += 1,
            Some(DependencyLevel::GrauII) => census.grau_ii += 1,
            Some(DependencyLevel::GrauIII) => census.grau_iii += 1,
            None => census.without_level += 1,
        }
    }

    census
}

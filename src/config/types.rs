//! Configuration types for the staffing compliance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the regulation the engine implements.
#[derive(Debug, Clone, Deserialize)]
pub struct RegulationMetadata {
    /// The regulation code (e.g., "RDC 502/2021").
    pub code: String,
    /// The human-readable name of the regulation.
    pub name: String,
    /// The article defining the caregiver dimensioning rule.
    pub article: String,
    /// URL to the official regulation text.
    pub source_url: String,
}

/// The residents-per-caregiver ratios and margins of the dimensioning rule.
///
/// All ratios are residents per caregiver; dividing a census count by a ratio
/// yields the (unrounded) caregivers required. The Grau I ratio applies to an
/// 8-hour reference day and is scaled by the shift workload factor; Grau II
/// and Grau III apply per shift.
///
/// # Example
///
/// ```
/// use staffing_engine::config::StaffingRatios;
/// use rust_decimal::Decimal;
///
/// let ratios = StaffingRatios::rdc_502_defaults();
/// assert_eq!(ratios.grau_i_daily_ratio, Decimal::from(20));
/// assert_eq!(ratios.attention_margin, 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StaffingRatios {
    /// Grau I residents served by one caregiver over an 8-hour reference day.
    pub grau_i_daily_ratio: Decimal,
    /// Grau II residents served by one caregiver per shift.
    pub grau_ii_ratio: Decimal,
    /// Grau III residents served by one caregiver per shift.
    pub grau_iii_ratio: Decimal,
    /// How many caregivers below minimum still classifies as `attention`
    /// rather than `non_compliant`.
    pub attention_margin: u32,
}

impl StaffingRatios {
    /// The ratios of RDC 502/2021 Art. 16, II.
    pub fn rdc_502_defaults() -> Self {
        Self {
            grau_i_daily_ratio: Decimal::from(20),
            grau_ii_ratio: Decimal::from(10),
            grau_iii_ratio: Decimal::from(6),
            attention_margin: 1,
        }
    }

    /// Checks that every ratio is strictly positive.
    ///
    /// A zero or negative ratio would make the dimensioning formula divide
    /// by a nonsensical value, so it is rejected at load time.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("grau_i_daily_ratio", self.grau_i_daily_ratio),
            ("grau_ii_ratio", self.grau_ii_ratio),
            ("grau_iii_ratio", self.grau_iii_ratio),
        ] {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidRatio {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RdcConfig {
    /// Regulation metadata.
    metadata: RegulationMetadata,
    /// Staffing ratios.
    ratios: StaffingRatios,
}

impl RdcConfig {
    /// Creates a new RdcConfig from its component parts.
    ///
    /// Fails when any ratio is not strictly positive.
    pub fn new(metadata: RegulationMetadata, ratios: StaffingRatios) -> EngineResult<Self> {
        ratios.validate()?;
        Ok(Self { metadata, ratios })
    }

    /// Returns the regulation metadata.
    pub fn regulation(&self) -> &RegulationMetadata {
        &self.metadata
    }

    /// Returns the staffing ratios.
    pub fn ratios(&self) -> &StaffingRatios {
        &self.ratios
    }
}

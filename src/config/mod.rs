//! Configuration for the Staffing Compliance Engine.
//!
//! Regulatory constants (the Grau I/II/III staffing ratios and the attention
//! margin) are configuration, not code: they are loaded from YAML so an
//! update to the regulation never touches calculation logic.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RdcConfig, RegulationMetadata, StaffingRatios};

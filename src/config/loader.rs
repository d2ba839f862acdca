//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RdcConfig, RegulationMetadata, StaffingRatios};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/rdc502/
/// ├── regulation.yaml  # Regulation metadata
/// └── ratios.yaml      # Staffing ratios and attention margin
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rdc502").unwrap();
/// println!("Regulation: {}", loader.config().regulation().code);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RdcConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any staffing ratio is zero or negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regulation_path = path.join("regulation.yaml");
        let metadata = Self::load_yaml::<RegulationMetadata>(&regulation_path)?;

        let ratios_path = path.join("ratios.yaml");
        let ratios = Self::load_yaml::<StaffingRatios>(&ratios_path)?;

        let config = RdcConfig::new(metadata, ratios)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RdcConfig {
        &self.config
    }

    /// Returns the loaded staffing ratios.
    pub fn ratios(&self) -> &StaffingRatios {
        self.config.ratios()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/rdc502").unwrap();

        assert_eq!(loader.config().regulation().code, "RDC 502/2021");
        assert_eq!(loader.ratios().grau_i_daily_ratio, Decimal::from(20));
        assert_eq!(loader.ratios().grau_ii_ratio, Decimal::from(10));
        assert_eq!(loader.ratios().grau_iii_ratio, Decimal::from(6));
        assert_eq!(loader.ratios().attention_margin, 1);
    }

    #[test]
    fn test_load_missing_directory_reports_path() {
        let err = ConfigLoader::load("./config/does-not-exist").unwrap_err();
        match err {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("does-not-exist"));
            }
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }
}

//! Error types for the Staffing Compliance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during compliance calculation.
//!
//! Data-completeness issues (missing census, residents without a dependency
//! grade, days with no configured shifts) are never errors; they are surfaced
//! as warnings on the calculation result instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Staffing Compliance Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A staffing ratio in the configuration was zero or negative.
    #[error("Invalid staffing ratio '{name}': {value} (ratios must be positive)")]
    InvalidRatio {
        /// The name of the invalid ratio.
        name: String,
        /// The offending value.
        value: String,
    },

    /// A shift template declared a duration the regulation does not define,
    /// or a duration inconsistent with its start/end times.
    #[error("Shift '{shift_id}' has an invalid duration: {message}")]
    InvalidShiftDuration {
        /// The ID of the offending shift template.
        shift_id: String,
        /// A description of what made the duration invalid.
        message: String,
    },

    /// A dependency grade string could not be mapped to Grau I/II/III.
    #[error("Unknown dependency grade: '{value}'")]
    UnknownDependencyGrade {
        /// The unrecognized grade value.
        value: String,
    },

    /// The requested report range ends before it starts.
    #[error("Invalid date range: {start} to {end} (end date before start date)")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

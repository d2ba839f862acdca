//! Staffing Compliance Engine for RDC 502/2021.
//!
//! This crate computes the legally-mandated minimum caregiver headcount for
//! Brazilian long-term elder-care facilities (ILPIs) under RDC 502/2021
//! Art. 16, evaluates actual shift staffing against that minimum, and
//! aggregates the results into per-day and per-period coverage reports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

//! HTTP API for the Staffing Compliance Engine.
//!
//! The engine itself performs no I/O; this layer receives census and
//! assignment data inline in the request body, runs the pure calculation
//! chain, and serializes the results verbatim.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CoverageDayRequest, CoverageReportRequest, ShiftAssignmentRequest, ShiftCalculationRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

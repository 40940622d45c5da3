//! HTTP API module for the raise allocation engine.
//!
//! This module provides the REST endpoint for allocating a raise budget
//! against the salary bands loaded at startup.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocationRequest, EmployeeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

//! HTTP API module for the PAYE engine.
//!
//! This module provides the REST API endpoints for calculating PAYE
//! and inspecting the schedule in use.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;

//! HTTP API module for the hours engine.
//!
//! This module provides the REST endpoint that categorizes one employee's
//! day summaries for a period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProcessRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

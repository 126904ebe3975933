//! HTTP API module for the tool rental engine.
//!
//! This module provides the REST API endpoints for pricing tool rentals and
//! rendering rental agreement printouts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequest;
pub use response::{ApiError, ApiErrorResponse, CheckoutResponse, MAX_SCHEDULE_DAYS};
pub use state::AppState;

//! HTTP request handlers for the tool rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::DayCharge;
use crate::error::EngineError;
use crate::models::RentalAgreement;

use super::request::CheckoutRequest;
use super::response::{ApiError, ApiErrorResponse, CheckoutResponse, MAX_SCHEDULE_DAYS};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/checkout/print", post(print_handler))
        .with_state(state)
}

/// Handler for POST /checkout endpoint.
///
/// Accepts a checkout request and returns the priced agreement with its
/// day-by-day billing schedule, cut off after [`MAX_SCHEDULE_DAYS`] days.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let agreement = match perform_checkout(&state, &request, correlation_id) {
        Ok(agreement) => agreement,
        Err(response) => return response,
    };

    let day_charges: Vec<DayCharge> = match state.checkout().day_charges(&agreement) {
        Ok(days) => days.take(MAX_SCHEDULE_DAYS).collect(),
        Err(err) => return error_response(err),
    };
    let schedule_truncated = agreement.rental_days() as usize > day_charges.len();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CheckoutResponse {
            checkout_id: correlation_id,
            agreement,
            day_charges,
            schedule_truncated,
        }),
    )
        .into_response()
}

/// Handler for POST /checkout/print endpoint.
///
/// Accepts a checkout request and returns the agreement printout as plain text.
async fn print_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing printout request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_checkout(&state, &request, correlation_id) {
        Ok(agreement) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            agreement.to_string(),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Unwraps the JSON body, turning a rejection into a 400 response.
fn parse_request(
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CheckoutRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text, Vec::new())
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err((
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response())
}

/// Runs the checkout, logging the outcome and mapping failures to responses.
fn perform_checkout(
    state: &AppState,
    request: &CheckoutRequest,
    correlation_id: Uuid,
) -> Result<RentalAgreement, Response> {
    let start_time = Instant::now();
    let result = state.checkout().checkout(
        &request.tool_code,
        request.checkout_date,
        request.rental_days,
        request.discount_percent,
    );

    match result {
        Ok(agreement) => {
            info!(
                correlation_id = %correlation_id,
                tool_code = %request.tool_code,
                rental_days = request.rental_days,
                chargeable_days = agreement.chargeable_days(),
                final_charge = %agreement.final_charge(),
                duration_us = start_time.elapsed().as_micros(),
                "Checkout completed successfully"
            );
            Ok(agreement)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                tool_code = %request.tool_code,
                error = %err,
                "Checkout failed"
            );
            Err(error_response(err))
        }
    }
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

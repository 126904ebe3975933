//! Request types for the tool rental API.
//!
//! This module defines the JSON request structure shared by the `/checkout`
//! and `/checkout/print` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the checkout endpoints.
///
/// Counts are signed so that negative input reaches validation and is
/// reported as a violation instead of a JSON error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The code of the tool to rent (e.g., "CHNS").
    pub tool_code: String,
    /// The day the tool is checked out.
    pub checkout_date: NaiveDate,
    /// The number of days the tool is rented for.
    pub rental_days: i64,
    /// The discount as a whole percentage.
    #[serde(default)]
    pub discount_percent: i64,
}

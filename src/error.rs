//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a checkout or a configuration load can produce.

use chrono::NaiveDate;
use thiserror::Error;

/// A single violated checkout constraint.
///
/// Violations are collected rather than reported one at a time, so a caller
/// sees every problem with its input in a single round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The rental must last at least one day.
    #[error("rental days must be at least 1, got {rental_days}")]
    NonPositiveRentalDays {
        /// The rejected rental day count.
        rental_days: i64,
    },

    /// The discount must lie within 0 to 100 percent inclusive.
    #[error("discount percent must be between 0 and 100, got {discount_percent}")]
    DiscountOutOfRange {
        /// The rejected discount percentage.
        discount_percent: i64,
    },

    /// The requested tool code is not in the catalog.
    #[error("unknown tool code '{tool_code}'")]
    UnknownToolCode {
        /// The code that was not found.
        tool_code: String,
    },
}

/// One or more violated checkout constraints, in the order they were checked.
///
/// The order is fixed: rental day count, then discount range, then tool code.
///
/// # Example
///
/// ```
/// use tool_rental::error::{ValidationError, Violation};
///
/// let error = ValidationError::new(vec![
///     Violation::NonPositiveRentalDays { rental_days: 0 },
///     Violation::UnknownToolCode { tool_code: "FOOBAR".to_string() },
/// ]);
/// assert_eq!(
///     error.to_string(),
///     "Validation failed: rental days must be at least 1, got 0; unknown tool code 'FOOBAR'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Creates a validation error from the collected violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the violations in the order they were detected.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The main error type for the tool rental engine.
///
/// # Example
///
/// ```
/// use tool_rental::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tools.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tools.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The checkout input violated one or more constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The due date of the rental falls outside the representable calendar.
    #[error("Rental of {rental_days} days from {checkout_date} ends outside the supported calendar")]
    DateOutOfRange {
        /// The checkout date.
        checkout_date: NaiveDate,
        /// The requested rental length.
        rental_days: u32,
    },

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

    /// A tool references a tool type that is not defined.
    #[error("Tool '{tool_code}' references undefined tool type '{tool_type}'")]
    UnknownToolType {
        /// The code of the offending tool.
        tool_code: String,
        /// The missing tool type key.
        tool_type: String,
    },

    /// A holiday definition can never produce a valid date.
    #[error("Invalid holiday rule '{name}': {message}")]
    InvalidHolidayRule {
        /// The name of the holiday.
        name: String,
        /// What is wrong with the rule.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

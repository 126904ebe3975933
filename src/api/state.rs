//! Application state for the tool rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::checkout::CheckoutService;

/// Shared application state.
///
/// Holds the checkout service, which is read-only and shared across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The checkout service.
    checkout: Arc<CheckoutService>,
}

impl AppState {
    /// Creates a new application state around the given checkout service.
    pub fn new(checkout: CheckoutService) -> Self {
        Self {
            checkout: Arc::new(checkout),
        }
    }

    /// Returns a reference to the checkout service.
    pub fn checkout(&self) -> &CheckoutService {
        &self.checkout
    }
}

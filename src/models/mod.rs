//! Core data models for the tool rental engine.
//!
//! This module contains the domain models used throughout the engine.

mod agreement;
mod date_range;
mod tool;

pub use agreement::RentalAgreement;
pub use date_range::DateRange;
pub use tool::{ChargingPolicy, Tool, ToolType};

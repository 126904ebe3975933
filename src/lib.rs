//! Tool rental pricing engine.
//!
//! This crate prices short-term tool rentals. It resolves observed holidays,
//! counts the chargeable days of a rental according to each tool type's
//! charging policy, and produces a rounded, discounted rental agreement.
//!
//! # Example
//!
//! ```
//! use tool_rental::catalog::ToolTable;
//! use tool_rental::checkout::CheckoutService;
//! use chrono::NaiveDate;
//!
//! let service = CheckoutService::with_defaults(ToolTable::builtin());
//! let agreement = service
//!     .checkout("LADW", NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(), 3, 10)
//!     .unwrap();
//! println!("{agreement}");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;

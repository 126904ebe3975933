//! Configuration loading for the tool rental engine.
//!
//! This module loads a tool catalog and holiday calendar from a directory of
//! YAML files, as an alternative to the built-in catalog.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/catalog").unwrap();
//! println!("Loaded {} tools", config.catalog().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidaysConfig, ToolConfig, ToolTypeConfig, ToolTypesConfig, ToolsConfig};

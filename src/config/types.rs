//! Configuration types for the rental catalog.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a catalog directory.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::Holiday;
use crate::models::{ChargingPolicy, ToolType};

/// A tool type as written in `tool_types.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypeConfig {
    /// The display name of the tool type.
    pub name: String,
    /// The charge per chargeable day.
    pub daily_charge: Decimal,
    /// Whether weekdays are billed.
    pub charge_weekday: bool,
    /// Whether weekends are billed.
    pub charge_weekend: bool,
    /// Whether observed holidays are billed.
    pub charge_holiday: bool,
}

impl From<ToolTypeConfig> for ToolType {
    fn from(config: ToolTypeConfig) -> Self {
        ToolType {
            name: config.name,
            daily_charge: config.daily_charge,
            policy: ChargingPolicy {
                charge_weekday: config.charge_weekday,
                charge_weekend: config.charge_weekend,
                charge_holiday: config.charge_holiday,
            },
        }
    }
}

/// Tool types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypesConfig {
    /// Map of tool type key to tool type details.
    pub tool_types: HashMap<String, ToolTypeConfig>,
}

/// A tool as written in `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// Key of the tool type in `tool_types.yaml`.
    pub tool_type: String,
    /// The manufacturer brand.
    pub brand: String,
}

/// Tools configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// Map of tool code to tool details.
    pub tools: BTreeMap<String, ToolConfig>,
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The holidays recognised for billing.
    pub holidays: Vec<Holiday>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_tool_types() {
        let yaml = r#"
tool_types:
  ladder:
    name: Ladder
    daily_charge: "1.99"
    charge_weekday: true
    charge_weekend: true
    charge_holiday: false
"#;
        let config: ToolTypesConfig = serde_yaml::from_str(yaml).unwrap();
        let ladder: ToolType = config.tool_types["ladder"].clone().into();
        assert_eq!(ladder.name, "Ladder");
        assert_eq!(ladder.daily_charge, Decimal::from_str("1.99").unwrap());
        assert!(ladder.policy.charge_weekend);
        assert!(!ladder.policy.charge_holiday);
    }

    #[test]
    fn test_deserialize_tools() {
        let yaml = r#"
tools:
  LADW:
    tool_type: ladder
    brand: Werner
"#;
        let config: ToolsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tools["LADW"].tool_type, "ladder");
        assert_eq!(config.tools["LADW"].brand, "Werner");
    }

    #[test]
    fn test_tool_type_missing_flag_fails() {
        let yaml = r#"
tool_types:
  ladder:
    name: Ladder
    daily_charge: "1.99"
    charge_weekday: true
"#;
        assert!(serde_yaml::from_str::<ToolTypesConfig>(yaml).is_err());
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rental
//! catalog and holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::HolidayCalendar;
use crate::catalog::ToolTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{Tool, ToolType};

use super::types::{HolidaysConfig, ToolTypesConfig, ToolsConfig};

/// Loads and provides access to a file-backed rental catalog.
///
/// # Directory Structure
///
/// ```text
/// config/catalog/
/// ├── tool_types.yaml  # Daily charge and charging policy per tool type
/// ├── tools.yaml       # Tool code to tool type and brand
/// └── holidays.yaml    # Holidays recognised for billing
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::catalog::ToolCatalog;
/// use tool_rental::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
/// let ladder = loader.catalog().lookup_tool("LADW").unwrap();
/// println!("{} by {}", ladder.tool_type.name, ladder.brand);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ToolTable,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or is missing a required field
    /// - A tool references a tool type that is not defined
    /// - A holiday rule can never produce a date
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tool_types = Self::load_yaml::<ToolTypesConfig>(&path.join("tool_types.yaml"))?;
        let tools = Self::load_yaml::<ToolsConfig>(&path.join("tools.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;

        let catalog = Self::build_catalog(tool_types, tools)?;
        let calendar = HolidayCalendar::new(holidays.holidays)?;

        debug!(
            path = %path.display(),
            tools = catalog.len(),
            holidays = calendar.holidays().len(),
            "Loaded rental catalog"
        );

        Ok(Self { catalog, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Resolves each tool's type key against the defined tool types.
    fn build_catalog(tool_types: ToolTypesConfig, tools: ToolsConfig) -> EngineResult<ToolTable> {
        let tools = tools
            .tools
            .into_iter()
            .map(|(code, tool)| {
                let tool_type: ToolType = tool_types
                    .tool_types
                    .get(&tool.tool_type)
                    .cloned()
                    .ok_or_else(|| EngineError::UnknownToolType {
                        tool_code: code.clone(),
                        tool_type: tool.tool_type.clone(),
                    })?
                    .into();

                Ok(Tool {
                    code,
                    tool_type,
                    brand: tool.brand,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(ToolTable::new(tools))
    }

    /// Returns the loaded tool catalog.
    pub fn catalog(&self) -> &ToolTable {
        &self.catalog
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Consumes the loader, returning the catalog and calendar.
    pub fn into_parts(self) -> (ToolTable, HolidayCalendar) {
        (self.catalog, self.calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCatalog;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/catalog"
    }

    /// A config directory under the system temp dir, removed on drop.
    struct TempConfigDir(PathBuf);

    impl AsRef<Path> for TempConfigDir {
        fn as_ref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempConfigDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    /// Writes the given files into a fresh temporary config directory.
    fn write_config(files: &[(&str, &str)]) -> TempConfigDir {
        let dir = TempConfigDir(
            std::env::temp_dir().join(format!("tool-rental-{}", uuid::Uuid::new_v4())),
        );
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.0.join(name), content).unwrap();
        }
        dir
    }

    const TOOL_TYPES: &str = r#"
tool_types:
  ladder:
    name: Ladder
    daily_charge: "1.99"
    charge_weekday: true
    charge_weekend: true
    charge_holiday: false
"#;

    const HOLIDAYS: &str = r#"
holidays:
  - name: Labor Day
    rule:
      kind: nth_weekday_of_month
      month: 9
      weekday: Mon
      n: 1
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.catalog().codes(), vec!["CHNS", "JAKD", "JAKR", "LADW"]);
        assert_eq!(loader.calendar().holidays().len(), 2);
    }

    #[test]
    fn test_loaded_catalog_matches_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = ToolTable::builtin();

        for code in builtin.codes() {
            assert_eq!(
                loader.catalog().lookup_tool(code),
                builtin.lookup_tool(code),
                "mismatch for {code}"
            );
        }
    }

    #[test]
    fn test_loaded_calendar_matches_us_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let (_, calendar) = loader.into_parts();
        assert_eq!(calendar, HolidayCalendar::us_default());

        // 2015-07-04 is a Saturday, observed Friday 07-03
        assert!(calendar.is_observed_holiday(NaiveDate::from_ymd_opt(2015, 7, 3).unwrap()));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("tool_types.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_temp_config_dir_removed_on_drop() {
        let dir = write_config(&[("tools.yaml", "tools: {}\n")]);
        let path = dir.0.clone();
        assert!(path.join("tools.yaml").exists());

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_holidays_file_returns_error() {
        let dir = write_config(&[
            ("tool_types.yaml", TOOL_TYPES),
            ("tools.yaml", "tools: {}\n"),
        ]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("holidays.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config(&[
            ("tool_types.yaml", "tool_types: [not, a, map"),
            ("tools.yaml", "tools: {}\n"),
            ("holidays.yaml", HOLIDAYS),
        ]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("tool_types.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tool_type_returns_error() {
        let tools = r#"
tools:
  DRLL:
    tool_type: drill
    brand: Makita
"#;
        let dir = write_config(&[
            ("tool_types.yaml", TOOL_TYPES),
            ("tools.yaml", tools),
            ("holidays.yaml", HOLIDAYS),
        ]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::UnknownToolType {
                tool_code,
                tool_type,
            }) => {
                assert_eq!(tool_code, "DRLL");
                assert_eq!(tool_type, "drill");
            }
            other => panic!("Expected UnknownToolType error, got {other:?}"),
        }
    }

    #[test]
    fn test_impossible_holiday_rule_returns_error() {
        let holidays = r#"
holidays:
  - name: Leap Day Plus One
    rule:
      kind: fixed_date
      month: 2
      day: 30
"#;
        let dir = write_config(&[
            ("tool_types.yaml", TOOL_TYPES),
            ("tools.yaml", "tools: {}\n"),
            ("holidays.yaml", holidays),
        ]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidHolidayRule { name, .. }) => {
                assert_eq!(name, "Leap Day Plus One");
            }
            other => panic!("Expected InvalidHolidayRule error, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_catalog_loads() {
        let tools = r#"
tools:
  LADR:
    tool_type: ladder
    brand: Little Giant
"#;
        let dir = write_config(&[
            ("tool_types.yaml", TOOL_TYPES),
            ("tools.yaml", tools),
            ("holidays.yaml", HOLIDAYS),
        ]);

        let loader = ConfigLoader::load(&dir).unwrap();
        let tool = loader.catalog().lookup_tool("LADR").unwrap();
        assert_eq!(tool.brand, "Little Giant");
        assert_eq!(tool.tool_type.name, "Ladder");
        assert!(tool.policy().charge_weekend);
    }
}

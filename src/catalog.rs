//! Tool catalog lookup.
//!
//! The checkout service depends on the [`ToolCatalog`] trait rather than on a
//! concrete table, so tools can come from the built-in table, from YAML
//! configuration, or from any other source.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{ChargingPolicy, Tool, ToolType};

/// A read-only source of rentable tools.
pub trait ToolCatalog: Send + Sync {
    /// Finds a tool by its exact code.
    fn lookup_tool(&self, code: &str) -> Option<&Tool>;
}

/// An in-memory tool catalog keyed by tool code.
///
/// # Example
///
/// ```
/// use tool_rental::catalog::{ToolCatalog, ToolTable};
///
/// let table = ToolTable::builtin();
/// let tool = table.lookup_tool("LADW").unwrap();
/// assert_eq!(tool.tool_type.name, "Ladder");
/// assert_eq!(tool.brand, "Werner");
/// assert!(table.lookup_tool("FOOBAR").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolTable {
    tools: HashMap<String, Tool>,
}

impl ToolTable {
    /// Creates a table from a list of tools. A later tool replaces an earlier
    /// one with the same code.
    pub fn new(tools: impl IntoIterator<Item = Tool>) -> Self {
        Self {
            tools: tools
                .into_iter()
                .map(|tool| (tool.code.clone(), tool))
                .collect(),
        }
    }

    /// The standard rental catalog: a chainsaw, a ladder and two jackhammers.
    pub fn builtin() -> Self {
        let ladder = tool_type("Ladder", 199, true, true, false);
        let chainsaw = tool_type("Chainsaw", 149, true, false, true);
        let jackhammer = tool_type("Jackhammer", 299, true, false, false);

        Self::new([
            tool("CHNS", &chainsaw, "Stihl"),
            tool("LADW", &ladder, "Werner"),
            tool("JAKD", &jackhammer, "DeWalt"),
            tool("JAKR", &jackhammer, "Ridgid"),
        ])
    }

    /// The tool codes in the table, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// The number of tools in the table.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the table holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolCatalog for ToolTable {
    fn lookup_tool(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }
}

fn tool_type(name: &str, daily_cents: i64, weekday: bool, weekend: bool, holiday: bool) -> ToolType {
    ToolType {
        name: name.to_string(),
        daily_charge: Decimal::new(daily_cents, 2),
        policy: ChargingPolicy {
            charge_weekday: weekday,
            charge_weekend: weekend,
            charge_holiday: holiday,
        },
    }
}

fn tool(code: &str, tool_type: &ToolType, brand: &str) -> Tool {
    Tool {
        code: code.to_string(),
        tool_type: tool_type.clone(),
        brand: brand.to_string(),
    }
}

//! Tool and tool type models.
//!
//! This module defines the [`Tool`], [`ToolType`] and [`ChargingPolicy`] types
//! that describe what a tool costs and on which days it is billed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

/// Which kinds of day a tool type is billed on.
///
/// The three flags are independent. A day that matches no true flag is
/// never billed.
///
/// # Example
///
/// ```
/// use tool_rental::models::ChargingPolicy;
///
/// let chainsaw = ChargingPolicy {
///     charge_weekday: true,
///     charge_weekend: false,
///     charge_holiday: true,
/// };
/// assert!(chainsaw.charge_holiday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChargingPolicy {
    /// Whether ordinary Monday to Friday days are billed.
    pub charge_weekday: bool,
    /// Whether Saturdays and Sundays are billed.
    pub charge_weekend: bool,
    /// Whether observed holidays are billed.
    pub charge_holiday: bool,
}

impl ChargingPolicy {
    /// Returns true if a day of the given type is billed under this policy.
    ///
    /// ```
    /// use tool_rental::calculation::DayType;
    /// use tool_rental::models::ChargingPolicy;
    ///
    /// let jackhammer = ChargingPolicy {
    ///     charge_weekday: true,
    ///     charge_weekend: false,
    ///     charge_holiday: false,
    /// };
    /// assert!(jackhammer.charges(DayType::Weekday));
    /// assert!(!jackhammer.charges(DayType::ObservedHoliday));
    /// ```
    pub fn charges(&self, day_type: DayType) -> bool {
        match day_type {
            DayType::Weekday => self.charge_weekday,
            DayType::Weekend => self.charge_weekend,
            DayType::ObservedHoliday => self.charge_holiday,
        }
    }
}

/// A category of tool sharing a daily rate and a charging policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolType {
    /// The display name of the tool type (e.g., "Chainsaw").
    pub name: String,
    /// The charge for each chargeable day.
    pub daily_charge: Decimal,
    /// Which days are chargeable.
    pub policy: ChargingPolicy,
}

/// A rentable tool.
///
/// # Example
///
/// ```
/// use tool_rental::models::{ChargingPolicy, Tool, ToolType};
/// use rust_decimal::Decimal;
///
/// let tool = Tool {
///     code: "LADW".to_string(),
///     tool_type: ToolType {
///         name: "Ladder".to_string(),
///         daily_charge: Decimal::new(199, 2),
///         policy: ChargingPolicy {
///             charge_weekday: true,
///             charge_weekend: true,
///             charge_holiday: false,
///         },
///     },
///     brand: "Werner".to_string(),
/// };
/// assert_eq!(tool.daily_charge(), Decimal::new(199, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The unique tool code (e.g., "CHNS").
    pub code: String,
    /// The type of the tool.
    pub tool_type: ToolType,
    /// The manufacturer brand.
    pub brand: String,
}

impl Tool {
    /// Returns the charging policy of the tool's type.
    pub fn policy(&self) -> ChargingPolicy {
        self.tool_type.policy
    }

    /// Returns the daily charge of the tool's type.
    pub fn daily_charge(&self) -> Decimal {
        self.tool_type.daily_charge
    }
}

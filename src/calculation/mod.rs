//! Calculation logic for the tool rental engine.
//!
//! This module contains the holiday resolver, the chargeable day calculator
//! that classifies each day of a billing window, and the pricing arithmetic
//! that turns chargeable days into rounded currency amounts.

mod chargeable_days;
mod holidays;
mod pricing;

pub use chargeable_days::{
    DayCharge, DayType, billing_window, charge_days, charge_schedule, chargeable_days, get_day_type,
    is_weekend,
};
pub(crate) use chargeable_days::count_charged;
pub use holidays::{
    Holiday, HolidayCalendar, HolidayRule, WeekendShift, observed_holidays,
};
pub use pricing::{CURRENCY_DECIMAL_PLACES, PricingResult, calculate_price, round_up_to_cent};

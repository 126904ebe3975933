//! Day classification and chargeable day counting.
//!
//! This module classifies each day of a rental's billing window as a weekday,
//! a weekend day or an observed holiday, and decides from the tool's
//! [`ChargingPolicy`] whether that day is billed.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult, ValidationError, Violation};
use crate::models::{ChargingPolicy, DateRange};

use super::HolidayCalendar;

/// Represents the type of day for billing.
///
/// Holiday status takes precedence: an observed holiday is always
/// [`DayType::ObservedHoliday`], whatever day of the week it falls on.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
///
/// let day_type = DayType::ObservedHoliday;
/// assert_eq!(day_type.to_string(), "Observed holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday or Sunday, not a holiday.
    Weekend,
    /// The observed date of a holiday.
    ObservedHoliday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::ObservedHoliday => write!(f, "Observed holiday"),
        }
    }
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Determines the day type for a date given the observed holidays around it.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// // July 4, 2015 was a Saturday and was observed on Friday July 3.
/// let holidays = HashSet::from([NaiveDate::from_ymd_opt(2015, 7, 3).unwrap()]);
///
/// let friday = NaiveDate::from_ymd_opt(2015, 7, 3).unwrap();
/// assert_eq!(get_day_type(friday, &holidays), DayType::ObservedHoliday);
///
/// let saturday = NaiveDate::from_ymd_opt(2015, 7, 4).unwrap();
/// assert_eq!(get_day_type(saturday, &holidays), DayType::Weekend);
///
/// let monday = NaiveDate::from_ymd_opt(2015, 7, 6).unwrap();
/// assert_eq!(get_day_type(monday, &holidays), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate, observed_holidays: &HashSet<NaiveDate>) -> DayType {
    if observed_holidays.contains(&date) {
        DayType::ObservedHoliday
    } else if is_weekend(date) {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}

/// The billing decision for one day of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCharge {
    /// The day being billed or not.
    pub date: NaiveDate,
    /// How the day was classified.
    pub day_type: DayType,
    /// Whether the tool's policy charges for this day.
    pub charged: bool,
}

/// Returns the billing window of a rental, the `rental_days` days after checkout.
///
/// A zero-day rental is rejected with a validation error. A window that runs
/// past the last representable date yields [`EngineError::DateOutOfRange`].
pub fn billing_window(checkout_date: NaiveDate, rental_days: u32) -> EngineResult<DateRange> {
    if rental_days == 0 {
        return Err(ValidationError::new(vec![Violation::NonPositiveRentalDays {
            rental_days: 0,
        }])
        .into());
    }
    DateRange::billing_window(checkout_date, rental_days).ok_or(EngineError::DateOutOfRange {
        checkout_date,
        rental_days,
    })
}

/// Lazily classifies each day of `window` and records whether it is charged.
///
/// Only the observed holidays inside the window are held in memory, so long
/// rentals can be counted without materialising a schedule.
pub fn charge_days(
    policy: ChargingPolicy,
    window: DateRange,
    calendar: &HolidayCalendar,
) -> impl Iterator<Item = DayCharge> + use<> {
    let observed_holidays = calendar.observed_in(&window);

    window.days().map(move |date| {
        let day_type = get_day_type(date, &observed_holidays);
        DayCharge {
            date,
            day_type,
            charged: policy.charges(day_type),
        }
    })
}

/// Classifies every day of `window` and records whether it is charged.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{charge_schedule, DayType, HolidayCalendar};
/// use tool_rental::models::{ChargingPolicy, DateRange};
/// use chrono::NaiveDate;
///
/// let chainsaw = ChargingPolicy {
///     charge_weekday: true,
///     charge_weekend: false,
///     charge_holiday: true,
/// };
/// let window = DateRange::billing_window(NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(), 5).unwrap();
///
/// let schedule = charge_schedule(chainsaw, window, &HolidayCalendar::us_default());
/// let charged: Vec<bool> = schedule.iter().map(|day| day.charged).collect();
/// assert_eq!(charged, vec![true, false, false, true, true]);
/// assert_eq!(schedule[0].day_type, DayType::ObservedHoliday);
/// ```
pub fn charge_schedule(
    policy: ChargingPolicy,
    window: DateRange,
    calendar: &HolidayCalendar,
) -> Vec<DayCharge> {
    charge_days(policy, window, calendar).collect()
}

/// Counts the charged days of `window` without building a schedule.
pub(crate) fn count_charged(
    policy: ChargingPolicy,
    window: DateRange,
    calendar: &HolidayCalendar,
) -> u32 {
    let charged = charge_days(policy, window, calendar)
        .filter(|day| day.charged)
        .count();
    // Bounded by the window length, which fits in u32.
    charged as u32
}

/// Counts the chargeable days of a rental.
///
/// The checkout date itself is never charged; billing covers the
/// `rental_days` days that follow it.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{chargeable_days, HolidayCalendar};
/// use tool_rental::models::ChargingPolicy;
/// use chrono::NaiveDate;
///
/// let chainsaw = ChargingPolicy {
///     charge_weekday: true,
///     charge_weekend: false,
///     charge_holiday: true,
/// };
/// let calendar = HolidayCalendar::us_default();
///
/// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
/// assert_eq!(chargeable_days(chainsaw, checkout, 5, &calendar).unwrap(), 3);
///
/// // Sunday July 4, 2021 is an ordinary weekend day; the holiday moved to Monday.
/// let checkout = NaiveDate::from_ymd_opt(2021, 7, 3).unwrap();
/// assert_eq!(chargeable_days(chainsaw, checkout, 1, &calendar).unwrap(), 0);
/// ```
pub fn chargeable_days(
    policy: ChargingPolicy,
    checkout_date: NaiveDate,
    rental_days: u32,
    calendar: &HolidayCalendar,
) -> EngineResult<u32> {
    let window = billing_window(checkout_date, rental_days)?;
    Ok(count_charged(policy, window, calendar))
}

//! Holiday rules and observed-date resolution.
//!
//! A holiday is defined by a [`HolidayRule`] that yields its nominal date for a
//! given year. Fixed-date holidays may carry a [`WeekendShift`] that moves a
//! Saturday occurrence to the preceding Friday and a Sunday occurrence to the
//! following Monday. The resulting *observed* date is what billing uses.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DateRange;

/// How a holiday that lands on a weekend is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendShift {
    /// The holiday is observed on its nominal date, weekend or not.
    #[default]
    Never,
    /// Saturday is observed on Friday, Sunday on Monday.
    NearestWeekday,
}

impl WeekendShift {
    /// Applies the shift to a nominal date.
    ///
    /// # Example
    ///
    /// ```
    /// use tool_rental::calculation::WeekendShift;
    /// use chrono::NaiveDate;
    ///
    /// // 2015-07-04 is a Saturday
    /// let saturday = NaiveDate::from_ymd_opt(2015, 7, 4).unwrap();
    /// assert_eq!(
    ///     WeekendShift::NearestWeekday.apply(saturday),
    ///     NaiveDate::from_ymd_opt(2015, 7, 3)
    /// );
    /// assert_eq!(WeekendShift::Never.apply(saturday), Some(saturday));
    /// ```
    pub fn apply(self, date: NaiveDate) -> Option<NaiveDate> {
        match (self, date.weekday()) {
            (WeekendShift::NearestWeekday, Weekday::Sat) => date.checked_sub_days(Days::new(1)),
            (WeekendShift::NearestWeekday, Weekday::Sun) => date.checked_add_days(Days::new(1)),
            _ => Some(date),
        }
    }
}

/// The rule that places a holiday in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidayRule {
    /// The same month and day every year, e.g. July 4.
    FixedDate {
        /// Month of the year, 1 to 12.
        month: u32,
        /// Day of the month.
        day: u32,
        /// How a weekend occurrence is observed.
        #[serde(default)]
        weekend_shift: WeekendShift,
    },
    /// The n-th given weekday of a month, e.g. the first Monday of September.
    NthWeekdayOfMonth {
        /// Month of the year, 1 to 12.
        month: u32,
        /// The weekday the holiday falls on.
        weekday: Weekday,
        /// Which occurrence of the weekday, 1 to 5.
        n: u8,
    },
}

impl HolidayRule {
    /// The date the rule places the holiday on in `year`, before any weekend shift.
    ///
    /// Returns `None` if the date does not exist that year, such as a fifth
    /// Monday in a month with only four.
    pub fn nominal_date(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            HolidayRule::FixedDate { month, day, .. } => NaiveDate::from_ymd_opt(year, month, day),
            HolidayRule::NthWeekdayOfMonth { month, weekday, n } => {
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
            }
        }
    }

    /// The date the holiday is observed on for billing in `year`.
    ///
    /// The observed date may fall in a neighbouring calendar year when a
    /// shifted date crosses a year boundary.
    pub fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        let nominal = self.nominal_date(year)?;
        match *self {
            HolidayRule::FixedDate { weekend_shift, .. } => weekend_shift.apply(nominal),
            HolidayRule::NthWeekdayOfMonth { .. } => Some(nominal),
        }
    }

    /// Checks that the rule can produce a date in at least some years.
    fn validate(&self) -> Result<(), String> {
        match *self {
            // 2000 is a leap year, so February 29 passes.
            HolidayRule::FixedDate { month, day, .. } => NaiveDate::from_ymd_opt(2000, month, day)
                .map(|_| ())
                .ok_or_else(|| format!("month {month} has no day {day}")),
            HolidayRule::NthWeekdayOfMonth { month, n, .. } => {
                if !(1..=12).contains(&month) {
                    Err(format!("month {month} is not between 1 and 12"))
                } else if !(1..=5).contains(&n) {
                    Err(format!("occurrence {n} is not between 1 and 5"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday's name (e.g., "Labor Day").
    pub name: String,
    /// The rule placing the holiday each year.
    pub rule: HolidayRule,
}

impl Holiday {
    /// July 4, observed on the nearest weekday when it falls on a weekend.
    pub fn independence_day() -> Self {
        Self {
            name: "Independence Day".to_string(),
            rule: HolidayRule::FixedDate {
                month: 7,
                day: 4,
                weekend_shift: WeekendShift::NearestWeekday,
            },
        }
    }

    /// The first Monday in September.
    pub fn labor_day() -> Self {
        Self {
            name: "Labor Day".to_string(),
            rule: HolidayRule::NthWeekdayOfMonth {
                month: 9,
                weekday: Weekday::Mon,
                n: 1,
            },
        }
    }
}

/// The set of holidays recognised for billing.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::us_default();
///
/// // July 4, 2021 is a Sunday, so it is observed on Monday July 5.
/// assert!(calendar.is_observed_holiday(NaiveDate::from_ymd_opt(2021, 7, 5).unwrap()));
/// assert!(!calendar.is_observed_holiday(NaiveDate::from_ymd_opt(2021, 7, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Creates a calendar, rejecting rules that can never produce a date.
    pub fn new(holidays: Vec<Holiday>) -> EngineResult<Self> {
        for holiday in &holidays {
            holiday
                .rule
                .validate()
                .map_err(|message| EngineError::InvalidHolidayRule {
                    name: holiday.name.clone(),
                    message,
                })?;
        }
        Ok(Self { holidays })
    }

    /// Independence Day and Labor Day.
    pub fn us_default() -> Self {
        Self {
            holidays: vec![Holiday::independence_day(), Holiday::labor_day()],
        }
    }

    /// The holidays in this calendar.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// The observed dates of every holiday whose nominal date falls in `year`.
    pub fn observed_dates(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.holidays
            .iter()
            .filter_map(|holiday| holiday.rule.observed_date(year))
            .collect()
    }

    /// The observed holidays falling within `range`.
    ///
    /// Each year the range touches is resolved separately, together with the
    /// years either side of it, since a shifted date can cross into the next
    /// or previous year.
    pub fn observed_in(&self, range: &DateRange) -> HashSet<NaiveDate> {
        let years = range.years();
        ((*years.start() - 1)..=(*years.end() + 1))
            .flat_map(|year| self.observed_dates(year))
            .filter(|date| range.contains(*date))
            .collect()
    }

    /// Checks if `date` is the observed date of any holiday.
    pub fn is_observed_holiday(&self, date: NaiveDate) -> bool {
        let year = date.year();
        ((year - 1)..=(year + 1)).any(|y| self.observed_dates(y).contains(&date))
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::us_default()
    }
}

/// The observed holiday dates for `year` under the default US calendar.
///
/// ```
/// use tool_rental::calculation::observed_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = observed_holidays(2015);
/// assert_eq!(holidays.len(), 2);
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2015, 7, 3).unwrap()));
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2015, 9, 7).unwrap()));
/// ```
pub fn observed_holidays(year: i32) -> BTreeSet<NaiveDate> {
    HolidayCalendar::us_default().observed_dates(year)
}

//! Inclusive calendar date ranges.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// An inclusive range of calendar dates where `start <= end`.
///
/// # Example
///
/// ```
/// use tool_rental::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2015, 7, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2015, 7, 7).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.len(), 5);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2015, 7, 3).unwrap())); // start date
/// assert!(range.contains(NaiveDate::from_ymd_opt(2015, 7, 7).unwrap())); // end date
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2015, 7, 2).unwrap())); // before
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, or `None` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the billing window of a rental: the `rental_days` days strictly
    /// after `checkout_date`.
    ///
    /// Returns `None` when `rental_days` is zero or the window would run past
    /// the last representable date.
    ///
    /// ```
    /// use tool_rental::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
    /// let window = DateRange::billing_window(checkout, 5).unwrap();
    /// assert_eq!(window.start(), NaiveDate::from_ymd_opt(2015, 7, 3).unwrap());
    /// assert_eq!(window.end(), NaiveDate::from_ymd_opt(2015, 7, 7).unwrap());
    /// assert!(DateRange::billing_window(checkout, 0).is_none());
    /// ```
    pub fn billing_window(checkout_date: NaiveDate, rental_days: u32) -> Option<Self> {
        if rental_days == 0 {
            return None;
        }
        let start = checkout_date.checked_add_days(Days::new(1))?;
        let end = checkout_date.checked_add_days(Days::new(u64::from(rental_days)))?;
        Self::new(start, end)
    }

    /// The first date of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last date of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a date falls within the range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The number of days in the range. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        // Both ends are included.
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    /// Iterates over every date in the range in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// The calendar years the range touches.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }
}

//! The checkout entry point.
//!
//! [`CheckoutService`] validates a checkout request against an injected
//! [`ToolCatalog`], classifies the billing window against a
//! [`HolidayCalendar`] and prices the result into a [`RentalAgreement`].

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{
    DayCharge, HolidayCalendar, billing_window, calculate_price, charge_days, charge_schedule,
    count_charged,
};
use crate::catalog::ToolCatalog;
use crate::config::ConfigLoader;
use crate::error::{EngineResult, ValidationError, Violation};
use crate::models::{DateRange, RentalAgreement, Tool};

/// Validated checkout terms, ready to be priced.
struct Terms<'a> {
    tool: &'a Tool,
    checkout_date: NaiveDate,
    rental_days: u32,
    discount_percent: u32,
    window: DateRange,
}

/// Prices tool rentals.
///
/// The service holds no mutable state, so one instance can serve any number
/// of concurrent checkouts.
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolTable;
/// use tool_rental::checkout::CheckoutService;
/// use tool_rental::error::EngineError;
/// use chrono::NaiveDate;
///
/// let service = CheckoutService::with_defaults(ToolTable::builtin());
/// let date = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
///
/// let result = service.checkout("JAKR", date, 5, 101);
/// assert!(matches!(result, Err(EngineError::Validation(_))));
/// ```
#[derive(Clone)]
pub struct CheckoutService {
    catalog: Arc<dyn ToolCatalog>,
    calendar: HolidayCalendar,
}

impl CheckoutService {
    /// Creates a service over the given catalog and holiday calendar.
    pub fn new(catalog: Arc<dyn ToolCatalog>, calendar: HolidayCalendar) -> Self {
        Self { catalog, calendar }
    }

    /// Creates a service over the given catalog with the US default holidays.
    pub fn with_defaults(catalog: impl ToolCatalog + 'static) -> Self {
        Self::new(Arc::new(catalog), HolidayCalendar::us_default())
    }

    /// Creates a service from a loaded configuration directory.
    pub fn from_config(config: ConfigLoader) -> Self {
        let (catalog, calendar) = config.into_parts();
        Self::new(Arc::new(catalog), calendar)
    }

    /// Returns the holiday calendar used for billing.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Checks out a tool and returns the priced rental agreement.
    ///
    /// `rental_days` and `discount_percent` are taken as signed integers so
    /// that out-of-range input is reported as a violation rather than lost
    /// at a type boundary.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`](crate::error::EngineError::Validation)
    ///   listing every violated constraint, in the order rental days, discount,
    ///   tool code.
    /// - [`EngineError::DateOutOfRange`](crate::error::EngineError::DateOutOfRange)
    ///   if the due date cannot be represented.
    pub fn checkout(
        &self,
        tool_code: &str,
        checkout_date: NaiveDate,
        rental_days: i64,
        discount_percent: i64,
    ) -> EngineResult<RentalAgreement> {
        let terms = self.terms(tool_code, checkout_date, rental_days, discount_percent)?;
        let chargeable_days = count_charged(terms.tool.policy(), terms.window, &self.calendar);
        Ok(Self::price(&terms, chargeable_days))
    }

    /// Like [`checkout`](Self::checkout), also returning the billing decision
    /// for each day of the rental.
    ///
    /// The schedule holds one entry per rental day. Use
    /// [`day_charges`](Self::day_charges) to walk a long rental lazily.
    pub fn checkout_with_schedule(
        &self,
        tool_code: &str,
        checkout_date: NaiveDate,
        rental_days: i64,
        discount_percent: i64,
    ) -> EngineResult<(RentalAgreement, Vec<DayCharge>)> {
        let terms = self.terms(tool_code, checkout_date, rental_days, discount_percent)?;
        let day_charges = charge_schedule(terms.tool.policy(), terms.window, &self.calendar);
        // Bounded by rental_days.
        let chargeable_days = day_charges.iter().filter(|day| day.charged).count() as u32;
        Ok((Self::price(&terms, chargeable_days), day_charges))
    }

    /// Lazily yields the billing decision for each day of an agreement made
    /// by this service.
    ///
    /// # Errors
    ///
    /// [`EngineError::DateOutOfRange`](crate::error::EngineError::DateOutOfRange)
    /// if the agreement's due date cannot be represented.
    pub fn day_charges(
        &self,
        agreement: &RentalAgreement,
    ) -> EngineResult<impl Iterator<Item = DayCharge> + use<>> {
        let window = billing_window(agreement.checkout_date(), agreement.rental_days())?;
        Ok(charge_days(agreement.tool().policy(), window, &self.calendar))
    }

    /// Validates the request and resolves its billing window.
    fn terms<'a>(
        &'a self,
        tool_code: &str,
        checkout_date: NaiveDate,
        rental_days: i64,
        discount_percent: i64,
    ) -> EngineResult<Terms<'a>> {
        let tool = self.validate(tool_code, rental_days, discount_percent)?;

        // Positive after validation; counts past u32 run off the calendar anyway.
        let rental_days = u32::try_from(rental_days).unwrap_or(u32::MAX);
        // Within 0..=100 after validation.
        let discount_percent = discount_percent as u32;

        let window = billing_window(checkout_date, rental_days)?;
        Ok(Terms {
            tool,
            checkout_date,
            rental_days,
            discount_percent,
            window,
        })
    }

    fn price(terms: &Terms<'_>, chargeable_days: u32) -> RentalAgreement {
        let tool = terms.tool;
        let pricing = calculate_price(tool.daily_charge(), chargeable_days, terms.discount_percent);

        debug!(
            tool_code = %tool.code,
            checkout_date = %terms.checkout_date,
            rental_days = terms.rental_days,
            chargeable_days,
            discount_percent = terms.discount_percent,
            final_charge = %pricing.final_charge,
            "Priced rental"
        );

        RentalAgreement::new(
            tool.clone(),
            terms.rental_days,
            terms.checkout_date,
            terms.window.end(),
            chargeable_days,
            terms.discount_percent,
            pricing,
        )
    }

    /// Collects every violated constraint, or returns the requested tool.
    fn validate(
        &self,
        tool_code: &str,
        rental_days: i64,
        discount_percent: i64,
    ) -> Result<&Tool, ValidationError> {
        let mut violations = Vec::new();

        if rental_days < 1 {
            violations.push(Violation::NonPositiveRentalDays { rental_days });
        }
        if !(0..=100).contains(&discount_percent) {
            violations.push(Violation::DiscountOutOfRange { discount_percent });
        }
        let tool = self.catalog.lookup_tool(tool_code);
        if tool.is_none() {
            violations.push(Violation::UnknownToolCode {
                tool_code: tool_code.to_string(),
            });
        }

        match tool {
            Some(tool) if violations.is_empty() => Ok(tool),
            _ => Err(ValidationError::new(violations)),
        }
    }
}

impl std::fmt::Debug for CheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutService")
            .field("calendar", &self.calendar)
            .finish_non_exhaustive()
    }
}

//! The rental agreement produced by a checkout.
//!
//! A [`RentalAgreement`] is built once from the priced result of a checkout and
//! exposes its values through accessors only. Its [`Display`](fmt::Display)
//! implementation renders the printout handed to the customer.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{PricingResult, round_up_to_cent};

use super::Tool;

/// Date format used on the printout, e.g. `07/02/15`.
const PRINTOUT_DATE_FORMAT: &str = "%m/%d/%y";

/// A priced rental agreement.
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolTable;
/// use tool_rental::checkout::CheckoutService;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let service = CheckoutService::with_defaults(ToolTable::builtin());
/// let agreement = service
///     .checkout("CHNS", NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(), 5, 25)
///     .unwrap();
///
/// assert_eq!(agreement.chargeable_days(), 3);
/// assert_eq!(agreement.final_charge(), Decimal::new(335, 2));
/// assert!(agreement.to_string().ends_with("Final charge: $3.35"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    tool: Tool,
    rental_days: u32,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
    daily_charge: Decimal,
    chargeable_days: u32,
    pre_discount_charge: Decimal,
    discount_percent: u32,
    discount_amount: Decimal,
    final_charge: Decimal,
}

impl RentalAgreement {
    /// Assembles an agreement from the tool, the rental terms and the priced result.
    pub fn new(
        tool: Tool,
        rental_days: u32,
        checkout_date: NaiveDate,
        due_date: NaiveDate,
        chargeable_days: u32,
        discount_percent: u32,
        pricing: PricingResult,
    ) -> Self {
        let daily_charge = tool.daily_charge();
        Self {
            tool,
            rental_days,
            checkout_date,
            due_date,
            daily_charge,
            chargeable_days,
            pre_discount_charge: pricing.pre_discount_charge,
            discount_percent,
            discount_amount: pricing.discount_amount,
            final_charge: pricing.final_charge,
        }
    }

    /// The rented tool.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// The number of days the tool is rented for.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// The day the tool was checked out. Never billed.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// The day the tool is due back, `rental_days` after checkout.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// The charge per chargeable day.
    pub fn daily_charge(&self) -> Decimal {
        self.daily_charge
    }

    /// The number of billed days in the rental window.
    pub fn chargeable_days(&self) -> u32 {
        self.chargeable_days
    }

    /// The charge before the discount is applied.
    pub fn pre_discount_charge(&self) -> Decimal {
        self.pre_discount_charge
    }

    /// The discount as a whole percentage.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// The discount taken off the pre-discount charge.
    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// The amount the customer pays.
    pub fn final_charge(&self) -> Decimal {
        self.final_charge
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool code: {}", self.tool.code)?;
        writeln!(f, "Tool type: {}", self.tool.tool_type.name)?;
        writeln!(f, "Tool brand: {}", self.tool.brand)?;
        writeln!(f, "Rental days: {}", self.rental_days)?;
        writeln!(
            f,
            "Check out date: {}",
            self.checkout_date.format(PRINTOUT_DATE_FORMAT)
        )?;
        writeln!(f, "Due date: {}", self.due_date.format(PRINTOUT_DATE_FORMAT))?;
        writeln!(
            f,
            "Daily rental charge: {}",
            format_currency(self.daily_charge)
        )?;
        writeln!(f, "Charge days: {}", self.chargeable_days)?;
        writeln!(
            f,
            "Pre-discount charge: {}",
            format_currency(self.pre_discount_charge)
        )?;
        writeln!(f, "Discount percent: {}%", self.discount_percent)?;
        writeln!(
            f,
            "Discount amount: {}",
            format_currency(self.discount_amount)
        )?;
        write!(f, "Final charge: {}", format_currency(self.final_charge))
    }
}

/// Formats an amount as US currency with thousands separators, e.g. `$1,234.56`.
fn format_currency(amount: Decimal) -> String {
    let cents = round_up_to_cent(amount);
    let sign = if cents.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", cents.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{fraction}")
}

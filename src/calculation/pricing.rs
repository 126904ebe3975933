//! Rental charge calculation.
//!
//! Amounts are computed in exact decimal arithmetic. The pre-discount charge
//! and the discount are each rounded up to the next cent; the final charge is
//! their exact difference.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places carried by every currency amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// The priced amounts of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Daily charge times chargeable days, rounded up to the cent.
    pub pre_discount_charge: Decimal,
    /// The discount on the pre-discount charge, rounded up to the cent.
    pub discount_amount: Decimal,
    /// What the customer pays.
    pub final_charge: Decimal,
}

/// Rounds an amount up to the next whole cent.
///
/// The result always carries exactly two decimal places, so zero is `0.00`.
///
/// ```
/// use tool_rental::calculation::round_up_to_cent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_up_to_cent(Decimal::from_str("1.1175").unwrap()), Decimal::from_str("1.12").unwrap());
/// assert_eq!(round_up_to_cent(Decimal::from_str("1.4950").unwrap()), Decimal::from_str("1.50").unwrap());
/// assert_eq!(round_up_to_cent(Decimal::from_str("4.47").unwrap()), Decimal::from_str("4.47").unwrap());
/// ```
pub fn round_up_to_cent(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::ToPositiveInfinity);
    // Rounding only lowers the scale; pad it back up.
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Prices a rental from its daily charge, chargeable days and discount.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::calculate_price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Chainsaw at $1.49/day for 3 chargeable days with 25% off.
/// let result = calculate_price(Decimal::from_str("1.49").unwrap(), 3, 25);
/// assert_eq!(result.pre_discount_charge, Decimal::from_str("4.47").unwrap());
/// assert_eq!(result.discount_amount, Decimal::from_str("1.12").unwrap()); // 1.1175 rounded up
/// assert_eq!(result.final_charge, Decimal::from_str("3.35").unwrap());
/// ```
pub fn calculate_price(
    daily_charge: Decimal,
    chargeable_days: u32,
    discount_percent: u32,
) -> PricingResult {
    let pre_discount_charge = round_up_to_cent(daily_charge * Decimal::from(chargeable_days));
    let discount_amount = round_up_to_cent(
        pre_discount_charge * Decimal::from(discount_percent) / Decimal::ONE_HUNDRED,
    );
    let final_charge = pre_discount_charge - discount_amount;

    PricingResult {
        pre_discount_charge,
        discount_amount,
        final_charge,
    }
}

//! Core pricing calculation functions.
//!
//! Pure functions for melon pricing math - no clock, no randomness.
//! The time of pricing and the splurge rate are passed in by the caller.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::prelude::*;

use crate::orders::models::{CategoryKind, MelonOrder};

use super::models::PricingRules;
use super::responses::PriceBreakdown;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use melon_orders::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Monday through Friday, inside the rush-hour window.
pub fn is_rush_hour(rules: &PricingRules, at: NaiveDateTime) -> bool {
    at.weekday().number_from_monday() <= 5 && rules.is_rush_hour_slot(at.hour())
}

/// Fee added to the unit price, zero outside rush hour.
pub fn rush_hour_fee(rules: &PricingRules, rush_hour: bool) -> Decimal {
    if rush_hour {
        rules.rush_hour_fee
    } else {
        Decimal::ZERO
    }
}

/// Unit price after the rush-hour fee and the holiday multiplier.
///
/// The multiplier applies to the fee too: a Christmas melon in rush hour
/// costs `(splurge + fee) * 1.5`.
pub fn unit_price(splurge_rate: Decimal, fee: Decimal, multiplier: Decimal) -> Decimal {
    (splurge_rate + fee) * multiplier
}

/// Flat surcharge for small international orders.
pub fn small_order_surcharge(rules: &PricingRules, category: CategoryKind, quantity: u32) -> Decimal {
    if category == CategoryKind::International && quantity < rules.small_order_threshold {
        rules.small_order_surcharge
    } else {
        Decimal::ZERO
    }
}

/// Price an order for a given splurge rate and moment.
///
/// total = (1 + tax) * quantity * unit_price, plus the small-order surcharge.
pub fn quote_order(
    rules: &PricingRules,
    order: &MelonOrder,
    splurge_rate: Decimal,
    at: NaiveDateTime,
) -> PriceBreakdown {
    let category = order.category().kind();
    let rush_hour = is_rush_hour(rules, at);
    let fee = rush_hour_fee(rules, rush_hour);
    let multiplier = rules.multiplier_for(order.species());
    let unit = unit_price(splurge_rate, fee, multiplier);
    let tax_rate = order.tax_rate();

    let subtotal = (Decimal::ONE + tax_rate) * Decimal::from(order.quantity()) * unit;
    let surcharge = small_order_surcharge(rules, category, order.quantity());
    let total = subtotal + surcharge;

    tracing::debug!(
        order_id = %order.id(),
        category = %category,
        %splurge_rate,
        rush_hour,
        %unit,
        %total,
        "Priced melon order"
    );

    PriceBreakdown {
        order_id: order.id(),
        category,
        species: order.species().to_string(),
        quantity: order.quantity(),
        priced_at: at,
        splurge_rate,
        rush_hour,
        rush_hour_fee: fee,
        holiday_multiplier: multiplier,
        unit_price: unit,
        tax_rate,
        subtotal,
        surcharge,
        total,
        total_rounded: round_money(total, 2),
    }
}

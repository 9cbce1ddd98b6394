//! Serializable pricing results.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::orders::models::CategoryKind;

/// Every step of one order's price calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub order_id: Uuid,
    pub category: CategoryKind,
    pub species: String,
    pub quantity: u32,
    pub priced_at: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::str")]
    pub splurge_rate: Decimal,
    pub rush_hour: bool,
    /// Fee actually added to the unit price (zero outside rush hour)
    #[serde(with = "rust_decimal::serde::str")]
    pub rush_hour_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub holiday_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    /// Taxed price of all melons, before the small-order surcharge
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    /// `total` rounded to cents
    #[serde(with = "rust_decimal::serde::str")]
    pub total_rounded: Decimal,
}

//! Pricing rule constants.
//!
//! Everything the price formula needs besides the order itself, the sampled
//! splurge rate and the time of pricing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Species that gets the holiday multiplier
pub const HOLIDAY_SPECIES: &str = "Christmas melon";

/// Tunable rules of the melon price formula
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRules {
    /// Lowest splurge rate (inclusive)
    pub splurge_min: u32,
    /// Highest splurge rate (exclusive)
    pub splurge_max: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub rush_hour_fee: Decimal,
    /// First rush hour of the day (inclusive)
    pub rush_hour_start: u32,
    /// Last rush hour of the day (inclusive)
    pub rush_hour_end: u32,
    pub holiday_species: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub holiday_multiplier: Decimal,
    /// International orders below this quantity pay the surcharge
    pub small_order_threshold: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub small_order_surcharge: Decimal,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            splurge_min: 5,
            splurge_max: 10,
            rush_hour_fee: dec!(4),
            rush_hour_start: 8,
            rush_hour_end: 11,
            holiday_species: HOLIDAY_SPECIES.to_string(),
            holiday_multiplier: dec!(1.5),
            small_order_threshold: 10,
            small_order_surcharge: dec!(3),
        }
    }
}

impl PricingRules {
    /// Multiplier applied to the unit price of `species`
    pub fn multiplier_for(&self, species: &str) -> Decimal {
        if species == self.holiday_species {
            self.holiday_multiplier
        } else {
            Decimal::ONE
        }
    }

    pub fn is_rush_hour_slot(&self, hour: u32) -> bool {
        (self.rush_hour_start..=self.rush_hour_end).contains(&hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = PricingRules::default();
        assert_eq!(rules.splurge_min, 5);
        assert_eq!(rules.splurge_max, 10);
        assert_eq!(rules.rush_hour_fee, dec!(4));
        assert_eq!(rules.small_order_surcharge, dec!(3));
        assert_eq!(rules.small_order_threshold, 10);
    }

    #[test]
    fn test_multiplier_exact_species_match() {
        let rules = PricingRules::default();
        assert_eq!(rules.multiplier_for("Christmas melon"), dec!(1.5));
        // The bare word is not the holiday species
        assert_eq!(rules.multiplier_for("Christmas"), Decimal::ONE);
        assert_eq!(rules.multiplier_for("christmas melon"), Decimal::ONE);
        assert_eq!(rules.multiplier_for("Crimson Sweet"), Decimal::ONE);
    }

    #[test]
    fn test_rush_hour_slot_bounds() {
        let rules = PricingRules::default();
        assert!(!rules.is_rush_hour_slot(7));
        assert!(rules.is_rush_hour_slot(8));
        assert!(rules.is_rush_hour_slot(11));
        assert!(!rules.is_rush_hour_slot(12));
    }
}

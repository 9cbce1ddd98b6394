//! Splurge rate sources.

use rand::Rng;
use rust_decimal::Decimal;

use super::models::PricingRules;

/// Picks the base unit price of a melon for one pricing run
pub trait PriceSampler {
    fn sample(&self, rules: &PricingRules) -> Decimal;
}

/// Whole-dollar splurge rate drawn uniformly from `[splurge_min, splurge_max)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SplurgeSampler;

impl PriceSampler for SplurgeSampler {
    fn sample(&self, rules: &PricingRules) -> Decimal {
        // gen_range panics on an empty range
        if rules.splurge_min >= rules.splurge_max {
            return Decimal::from(rules.splurge_min);
        }
        let rate = rand::thread_rng().gen_range(rules.splurge_min..rules.splurge_max);
        Decimal::from(rate)
    }
}

/// Returns the same base price every time
#[derive(Debug, Clone, Copy)]
pub struct FixedPrice(pub Decimal);

impl PriceSampler for FixedPrice {
    fn sample(&self, _rules: &PricingRules) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_splurge_sampler_stays_in_range() {
        let rules = PricingRules::default();
        for _ in 0..500 {
            let rate = SplurgeSampler.sample(&rules);
            assert!(rate >= dec!(5), "rate {} below range", rate);
            assert!(rate < dec!(10), "rate {} above range", rate);
        }
    }

    #[test]
    fn test_splurge_sampler_empty_range() {
        let rules = PricingRules {
            splurge_min: 7,
            splurge_max: 7,
            ..PricingRules::default()
        };
        assert_eq!(SplurgeSampler.sample(&rules), dec!(7));
    }

    #[test]
    fn test_fixed_price() {
        let rules = PricingRules::default();
        assert_eq!(FixedPrice(dec!(6.25)).sample(&rules), dec!(6.25));
    }
}

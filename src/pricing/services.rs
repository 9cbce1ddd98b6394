//! Pricing service wiring rules, clock and splurge sampler together.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::orders::models::MelonOrder;

use super::calculators::quote_order;
use super::clock::{Clock, LocalClock};
use super::models::PricingRules;
use super::responses::PriceBreakdown;
use super::sampler::{PriceSampler, SplurgeSampler};

/// Prices melon orders.
///
/// Production pricers read the local clock and draw a fresh splurge rate on
/// every call. Tests swap either collaborator with [`OrderPricer::with_clock`]
/// and [`OrderPricer::with_sampler`].
pub struct OrderPricer {
    rules: PricingRules,
    clock: Box<dyn Clock>,
    sampler: Box<dyn PriceSampler>,
}

impl OrderPricer {
    /// Pricer using the local clock and random splurge rates
    pub fn new(rules: PricingRules) -> Self {
        Self {
            rules,
            clock: Box::new(LocalClock),
            sampler: Box::new(SplurgeSampler),
        }
    }

    /// Pricer using the rules from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.pricing.clone())
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_sampler(mut self, sampler: impl PriceSampler + 'static) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Full breakdown of the order's price right now
    pub fn quote(&self, order: &MelonOrder) -> PriceBreakdown {
        quote_with(&self.rules, order, self.clock.as_ref(), self.sampler.as_ref())
    }

    /// Order total, tax and surcharges included
    pub fn total(&self, order: &MelonOrder) -> Decimal {
        self.quote(order).total
    }
}

impl Default for OrderPricer {
    fn default() -> Self {
        Self::new(PricingRules::default())
    }
}

/// Sample a splurge rate, read the clock, and price the order.
pub fn quote_with(
    rules: &PricingRules,
    order: &MelonOrder,
    clock: &dyn Clock,
    sampler: &dyn PriceSampler,
) -> PriceBreakdown {
    let splurge_rate = sampler.sample(rules);
    quote_order(rules, order, splurge_rate, clock.now())
}

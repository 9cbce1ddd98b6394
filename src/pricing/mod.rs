//! Pricing engine for melon orders.
//!
//! The formula itself lives in [`calculators`] and is pure. Time and the
//! splurge rate come from the [`clock::Clock`] and [`sampler::PriceSampler`]
//! collaborators held by [`services::OrderPricer`].

pub mod calculators;
pub mod clock;
pub mod models;
pub mod responses;
pub mod sampler;
pub mod services;

// Re-export commonly used items
pub use calculators::{quote_order, round_money};
pub use clock::{Clock, FixedClock, LocalClock};
pub use models::PricingRules;
pub use responses::PriceBreakdown;
pub use sampler::{FixedPrice, PriceSampler, SplurgeSampler};
pub use services::OrderPricer;

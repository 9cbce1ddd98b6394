//! Melon order model and pricing engine.
//!
//! Orders come in three categories (domestic, international, government),
//! each with its own tax rate and category-specific data. Totals follow the
//! splurge-rate pricing rules in [`pricing`].

pub mod config;
pub mod error;
pub mod logging;
pub mod orders;
pub mod pricing;

pub use config::Settings;
pub use error::{OrderError, Result};
pub use orders::{CategoryKind, MelonOrder, NewOrderRequest, OrderCategory, MAX_MELONS};
pub use pricing::{OrderPricer, PriceBreakdown, PricingRules};

//! Melon order model.
//!
//! One struct for every customer category. Category-specific data lives in
//! the [`OrderCategory`] variant, and category-specific operations return
//! [`OrderError::CapabilityMismatch`] when called on the wrong variant.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{OrderError, Result};
use crate::pricing::clock::{Clock, LocalClock};
use crate::pricing::models::PricingRules;
use crate::pricing::sampler::{PriceSampler, SplurgeSampler};
use crate::pricing::services::quote_with;

/// Most melons a single order may contain
pub const MAX_MELONS: u32 = 100;

/// Customer category without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Domestic,
    International,
    Government,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Domestic => "domestic",
            CategoryKind::International => "international",
            CategoryKind::Government => "government",
        }
    }

    /// Sales tax charged on top of the melon price
    pub fn tax_rate(&self) -> Decimal {
        match self {
            CategoryKind::Domestic => dec!(0.08),
            CategoryKind::International => dec!(0.17),
            CategoryKind::Government => Decimal::ZERO,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer category with its category-specific fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OrderCategory {
    /// Order from within the USA
    Domestic,
    /// Non-US order
    International { country_code: String },
    /// Order purchased by the US government
    Government {
        #[serde(default)]
        passed_inspection: bool,
    },
}

impl OrderCategory {
    pub fn international(country_code: impl Into<String>) -> Self {
        OrderCategory::International {
            country_code: country_code.into(),
        }
    }

    /// Government category awaiting inspection
    pub fn government() -> Self {
        OrderCategory::Government {
            passed_inspection: false,
        }
    }

    pub fn kind(&self) -> CategoryKind {
        match self {
            OrderCategory::Domestic => CategoryKind::Domestic,
            OrderCategory::International { .. } => CategoryKind::International,
            OrderCategory::Government { .. } => CategoryKind::Government,
        }
    }
}

/// A melon purchase order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MelonOrder {
    id: Uuid,
    species: String,
    quantity: u32,
    category: OrderCategory,
    #[serde(with = "rust_decimal::serde::str")]
    tax_rate: Decimal,
    shipped: bool,
}

impl MelonOrder {
    /// Create an order, rejecting more than [`MAX_MELONS`] melons and
    /// international orders without a country code
    pub fn new(species: impl Into<String>, quantity: u32, category: OrderCategory) -> Result<Self> {
        let species = species.into();
        let kind = category.kind();

        if quantity > MAX_MELONS {
            tracing::warn!(%species, quantity, category = %kind, "Rejected melon order: too many melons");
            return Err(OrderError::too_many(quantity));
        }

        let category = match category {
            OrderCategory::International { country_code } => {
                let code = country_code.trim();
                if code.is_empty() {
                    tracing::warn!(%species, quantity, "Rejected melon order: missing country code");
                    return Err(OrderError::MissingCountryCode);
                }
                OrderCategory::international(code)
            }
            other => other,
        };

        let order = Self {
            id: Uuid::new_v4(),
            species,
            quantity,
            tax_rate: kind.tax_rate(),
            category,
            shipped: false,
        };
        tracing::debug!(order_id = %order.id, category = %kind, quantity, "Created melon order");
        Ok(order)
    }

    pub fn domestic(species: impl Into<String>, quantity: u32) -> Result<Self> {
        Self::new(species, quantity, OrderCategory::Domestic)
    }

    pub fn international(
        species: impl Into<String>,
        quantity: u32,
        country_code: impl Into<String>,
    ) -> Result<Self> {
        Self::new(species, quantity, OrderCategory::international(country_code))
    }

    pub fn government(species: impl Into<String>, quantity: u32) -> Result<Self> {
        Self::new(species, quantity, OrderCategory::government())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> &OrderCategory {
        &self.category
    }

    pub fn kind(&self) -> CategoryKind {
        self.category.kind()
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn is_shipped(&self) -> bool {
        self.shipped
    }

    /// Price with a fresh splurge rate at the current local time
    pub fn total(&self) -> Decimal {
        self.total_with(&LocalClock, &SplurgeSampler)
    }

    /// Price using the given clock and splurge rate source
    pub fn total_with(&self, clock: &dyn Clock, sampler: &dyn PriceSampler) -> Decimal {
        quote_with(&PricingRules::default(), self, clock, sampler).total
    }

    /// Record that the order has shipped. Repeat calls are no-ops.
    pub fn mark_shipped(&mut self) {
        if !self.shipped {
            tracing::info!(order_id = %self.id, "Melon order shipped");
        }
        self.shipped = true;
    }

    /// Record the inspection result of a government order
    pub fn mark_inspection(&mut self, passed: bool) -> Result<()> {
        match &mut self.category {
            OrderCategory::Government { passed_inspection } => {
                *passed_inspection = passed;
                tracing::info!(order_id = %self.id, passed, "Recorded melon inspection");
                Ok(())
            }
            other => Err(OrderError::CapabilityMismatch {
                operation: "mark inspection",
                category: other.kind(),
            }),
        }
    }

    /// Inspection result of a government order
    pub fn passed_inspection(&self) -> Result<bool> {
        match &self.category {
            OrderCategory::Government { passed_inspection } => Ok(*passed_inspection),
            other => Err(OrderError::CapabilityMismatch {
                operation: "read inspection result",
                category: other.kind(),
            }),
        }
    }

    /// Destination country of an international order
    pub fn country_code(&self) -> Result<&str> {
        match &self.category {
            OrderCategory::International { country_code } => Ok(country_code),
            other => Err(OrderError::CapabilityMismatch {
                operation: "get country code",
                category: other.kind(),
            }),
        }
    }
}

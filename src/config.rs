//! Environment configuration
//!
//! Values come from the process environment, after loading a `.env` file
//! if one exists. Unset variables fall back to the built-in defaults.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{OrderError, Result};
use crate::pricing::models::PricingRules;

pub const DEFAULT_LOG_FILTER: &str = "melon_orders=info";

/// Largest configurable rush-hour fee or small-order surcharge
pub const MAX_FEE: Decimal = dec!(1000000);

/// Largest configurable holiday multiplier
pub const MAX_MULTIPLIER: Decimal = dec!(100);

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit JSON log lines instead of compact text
    pub log_json: bool,
    pub pricing: PricingRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
            pricing: PricingRules::default(),
        }
    }
}

impl Settings {
    /// Load `.env` (if present) and read settings from the environment
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(OrderError::Config {
                    key: ".env".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(filter) = lookup("MELON_LOG_FILTER") {
            settings.log_filter = filter;
        }
        if let Some(raw) = lookup("MELON_LOG_JSON") {
            settings.log_json = parse_bool("MELON_LOG_JSON", &raw)?;
        }

        let rules = &mut settings.pricing;
        if let Some(raw) = lookup("MELON_RUSH_HOUR_FEE") {
            rules.rush_hour_fee = parse_amount("MELON_RUSH_HOUR_FEE", &raw, MAX_FEE)?;
        }
        if let Some(raw) = lookup("MELON_SMALL_ORDER_SURCHARGE") {
            rules.small_order_surcharge = parse_amount("MELON_SMALL_ORDER_SURCHARGE", &raw, MAX_FEE)?;
        }
        if let Some(raw) = lookup("MELON_HOLIDAY_MULTIPLIER") {
            rules.holiday_multiplier = parse_amount("MELON_HOLIDAY_MULTIPLIER", &raw, MAX_MULTIPLIER)?;
        }
        if let Some(raw) = lookup("MELON_RUSH_HOUR_START") {
            rules.rush_hour_start = parse_hour("MELON_RUSH_HOUR_START", &raw)?;
        }
        if let Some(raw) = lookup("MELON_RUSH_HOUR_END") {
            rules.rush_hour_end = parse_hour("MELON_RUSH_HOUR_END", &raw)?;
        }

        if rules.rush_hour_start > rules.rush_hour_end {
            return Err(OrderError::Config {
                key: "MELON_RUSH_HOUR_START".to_string(),
                message: format!(
                    "rush hour starts at {} but ends at {}",
                    rules.rush_hour_start, rules.rush_hour_end
                ),
            });
        }

        Ok(settings)
    }
}

fn config_error(key: &str, message: impl Into<String>) -> OrderError {
    OrderError::Config {
        key: key.to_string(),
        message: message.into(),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(config_error(key, format!("expected true or false, got '{}'", other))),
    }
}

fn parse_amount(key: &str, raw: &str, max: Decimal) -> Result<Decimal> {
    let amount = Decimal::from_str(raw.trim()).map_err(|e| config_error(key, e.to_string()))?;
    if amount.is_sign_negative() {
        return Err(config_error(key, "must not be negative"));
    }
    if amount > max {
        return Err(config_error(key, format!("{} exceeds the maximum of {}", amount, max)));
    }
    Ok(amount)
}

fn parse_hour(key: &str, raw: &str) -> Result<u32> {
    let hour: u32 = raw.trim().parse().map_err(|_| config_error(key, format!("'{}' is not an hour", raw)))?;
    if hour > 23 {
        return Err(config_error(key, format!("hour {} out of range 0-23", hour)));
    }
    Ok(hour)
}

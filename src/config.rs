//! # Configuration
//!
//! Storefront settings with defaults matching the dessert shop page.
//!
//! Values can be overridden from the environment:
//!
//! ```bash
//! STOREFRONT_TAX_RATE=7.5 STOREFRONT_CURRENCY='€' cargo run
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TAX_RATE_VAR: &str = "STOREFRONT_TAX_RATE";
pub const CURRENCY_VAR: &str = "STOREFRONT_CURRENCY";
pub const MAILBOX_CAPACITY_VAR: &str = "STOREFRONT_MAILBOX_CAPACITY";

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Tax rate is negative or not a finite number.
    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(f64),

    /// The session mailbox must hold at least one action.
    #[error("Invalid mailbox capacity: {0}")]
    InvalidCapacity(usize),

    /// An environment variable could not be parsed.
    #[error("Could not parse {var}={value}")]
    Parse { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Tax as a percentage of the subtotal.
    pub tax_rate: f64,
    pub currency_symbol: String,
    /// Capacity of the session's action channel.
    pub mailbox_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            tax_rate: 8.25,
            currency_symbol: "$".to_string(),
            mailbox_capacity: 32,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by any `STOREFRONT_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(TAX_RATE_VAR) {
            config.tax_rate = parse_var(TAX_RATE_VAR, &value)?;
        }
        if let Some(value) = lookup(CURRENCY_VAR) {
            config.currency_symbol = value;
        }
        if let Some(value) = lookup(MAILBOX_CAPACITY_VAR) {
            config.mailbox_capacity = parse_var(MAILBOX_CAPACITY_VAR, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 {
            return Err(ConfigError::InvalidTaxRate(self.tax_rate));
        }
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.mailbox_capacity));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        var: var.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.tax_rate, 8.25);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            (TAX_RATE_VAR, " 7.5 "),
            (CURRENCY_VAR, "€"),
            (MAILBOX_CAPACITY_VAR, "4"),
        ]))
        .unwrap();
        assert_eq!(config.tax_rate, 7.5);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.mailbox_capacity, 4);
    }

    #[test]
    fn test_rejects_bad_values() {
        let parse = StorefrontConfig::from_lookup(lookup_from(&[(TAX_RATE_VAR, "lots")]));
        assert!(matches!(parse, Err(ConfigError::Parse { .. })));

        let negative = StorefrontConfig::from_lookup(lookup_from(&[(TAX_RATE_VAR, "-1")]));
        assert_eq!(negative, Err(ConfigError::InvalidTaxRate(-1.0)));

        let capacity = StorefrontConfig::from_lookup(lookup_from(&[(MAILBOX_CAPACITY_VAR, "0")]));
        assert_eq!(capacity, Err(ConfigError::InvalidCapacity(0)));
    }
}

//! Configuration for the report accumulator

use std::env;
use std::str::FromStr;

use common::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How orders are checked before they are folded into a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderValidation {
    /// Reject batches containing a negative price, volume or fee
    #[default]
    Strict,
    /// Fold every order as given, treating signs as meaningful
    Permissive,
}

impl FromStr for OrderValidation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(OrderValidation::Strict),
            "permissive" => Ok(OrderValidation::Permissive),
            other => Err(Error::ConfigurationError(format!(
                "unknown order validation mode '{}', expected 'strict' or 'permissive'",
                other
            ))),
        }
    }
}

/// Configuration for the report accumulator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorConfig {
    /// Order validation policy
    pub validation: OrderValidation,
    /// Emit a trace event for every folded order
    pub trace_orders: bool,
}

impl AccumulatorConfig {
    /// Create a new configuration using environment variables
    ///
    /// Reads `PNL_ORDER_VALIDATION` and `PNL_TRACE_ORDERS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }
    
    /// Create a new configuration with custom values
    pub fn new(validation: OrderValidation, trace_orders: bool) -> Self {
        Self {
            validation,
            trace_orders,
        }
    }
    
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let validation = match lookup("PNL_ORDER_VALIDATION") {
            Some(value) => value.parse()?,
            None => OrderValidation::default(),
        };
        let trace_orders = lookup("PNL_TRACE_ORDERS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        
        Ok(Self {
            validation,
            trace_orders,
        })
    }
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
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AccumulatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AccumulatorConfig::default());
        assert_eq!(config.validation, OrderValidation::Strict);
        assert!(!config.trace_orders);
    }

    #[test]
    fn test_overrides() {
        let config = AccumulatorConfig::from_lookup(lookup_from(&[
            ("PNL_ORDER_VALIDATION", " Permissive "),
            ("PNL_TRACE_ORDERS", "1"),
        ]))
        .unwrap();
        assert_eq!(config, AccumulatorConfig::new(OrderValidation::Permissive, true));
    }

    #[test]
    fn test_invalid_validation_mode() {
        let result = AccumulatorConfig::from_lookup(lookup_from(&[("PNL_ORDER_VALIDATION", "lenient")]));
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }
}

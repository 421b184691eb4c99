//! Error types for profit/loss reporting
//!
//! This module provides a unified error handling system for the workspace. The
//! accumulation fails only when decimal arithmetic overflows; the other errors
//! come from order validation, report reconciliation, configuration and
//! transport.

use std::fmt::Display;
use thiserror::Error;

/// Profit/loss error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error related to order validation
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    
    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    
    /// Decimal arithmetic left the representable range
    #[error("Decimal error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::InvalidOrder(msg) => Error::InvalidOrder(format!("{}: {}", context, msg)),
                Error::ValidationError(msg) => Error::ValidationError(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_prefixes_message() {
        let result: Result<()> = Err(Error::InvalidOrder("negative volume".to_string()));
        let err = result.with_context(|| "order 3").unwrap_err();
        assert_eq!(err.to_string(), "Invalid order: order 3: negative volume");
    }

    #[test]
    fn test_with_context_keeps_decimal_error_kind() {
        let result: Result<()> = Err(Error::DecimalError("overflow".to_string()));
        let err = result.with_context(|| "order 0 of batch").unwrap_err();
        assert!(matches!(err, Error::DecimalError(_)));
        assert_eq!(err.to_string(), "Decimal error: order 0 of batch: overflow");
    }
}

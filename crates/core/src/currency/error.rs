//! Currency and exchange rate error types.

use thiserror::Error;

/// Errors produced by rate resolution and conversion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExchangeError {
    /// A referenced currency does not exist.
    #[error("Currency with code {0} not found")]
    CurrencyNotFound(String),

    /// No stored rate exists for the named ordered pair.
    #[error("Exchange rate with code pair {base}-{target} not found")]
    RateNotFound {
        /// Base currency code of the missing pair.
        base: String,
        /// Target currency code of the missing pair.
        target: String,
    },

    /// The storage layer could not complete a lookup. Opaque, not retried.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ExchangeError {
    /// Create a missing-pair error.
    #[must_use]
    pub fn rate_not_found(base: impl Into<String>, target: impl Into<String>) -> Self {
        Self::RateNotFound {
            base: base.into(),
            target: target.into(),
        }
    }

    /// Create a storage error.
    #[must_use]
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

//! Collaborator traits consumed by the resolver.
//!
//! These traits are implemented by the db crate. Absence is an explicit
//! `Ok(None)`, never an error: the fallback chain needs total lookups.

use super::error::ExchangeError;
use super::types::{Currency, ExchangeRate};

/// Read access to the currency directory.
pub trait CurrencyDirectory: Send + Sync {
    /// Find a currency by its 3-letter code.
    fn find_by_code(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = Result<Option<Currency>, ExchangeError>> + Send;

    /// Find a currency by its storage identity.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Currency>, ExchangeError>> + Send;
}

/// Read access to stored exchange rates.
pub trait RateStore: Send + Sync {
    /// Find the stored rate for the exact ordered pair (base, target).
    ///
    /// The resolver, not the store, is responsible for trying the reversed
    /// pair.
    fn find_by_pair(
        &self,
        base_id: i64,
        target_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<ExchangeRate>, ExchangeError>> + Send;
}

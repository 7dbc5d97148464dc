//! Currency and exchange rate domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency known to the directory.
///
/// Immutable after creation; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Storage-assigned identity, stable for the record's lifetime.
    pub id: i64,
    /// ISO 4217 code, exactly 3 uppercase letters, unique.
    pub code: String,
    /// Display name, at most 50 characters.
    pub name: String,
    /// Currency sign, at most 5 characters.
    pub sign: String,
}

/// A stored exchange rate for an ordered currency pair.
///
/// (base, target) and (target, base) are distinct rows; at most one row
/// exists per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Storage-assigned identity.
    pub id: i64,
    /// Identity of the base currency.
    pub base_currency_id: i64,
    /// Identity of the target currency.
    pub target_currency_id: i64,
    /// Positive decimal rate, persisted at fixed scale.
    pub rate: Decimal,
}

/// How a resolved rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOrigin {
    /// A stored rate for the exact ordered pair, returned unchanged.
    Direct,
    /// The multiplicative inverse of the stored reverse-pair rate.
    Inverted,
    /// Derived from two pivot-relative rates; has no stored identity.
    Cross,
}

/// The outcome of rate resolution.
///
/// Direct and inverted rates carry the stored row's id and pair for response
/// shaping only; a cross rate is ephemeral and has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRate {
    /// Stored row id, absent for cross rates.
    pub id: Option<i64>,
    /// Base currency id of the carried pair.
    pub base_currency_id: i64,
    /// Target currency id of the carried pair.
    pub target_currency_id: i64,
    /// The effective rate.
    pub rate: Decimal,
    /// Which step of the fallback chain produced the rate.
    pub origin: RateOrigin,
}

/// The result of converting an amount between two currencies.
///
/// Constructed fresh per request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The base currency.
    pub base: Currency,
    /// The target currency.
    pub target: Currency,
    /// The effective exchange rate.
    pub rate: Decimal,
    /// The requested amount, in the base currency.
    pub amount: Decimal,
    /// The converted amount, in the target currency.
    pub converted_amount: Decimal,
}

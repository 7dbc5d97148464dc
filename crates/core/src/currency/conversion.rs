//! Amount conversion: a thin layer over the rate resolver.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::ExchangeError;
use super::resolver::RateResolver;
use super::round_half_even;
use super::store::{CurrencyDirectory, RateStore};
use super::types::{Conversion, Currency};

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) at the fixed rate scale.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Decimal {
    round_half_even(amount * rate)
}

/// Converts amounts between currencies via the resolver's fallback chain.
///
/// Pure apart from the resolver's read-only lookups: no stored data is
/// mutated and resolution failures propagate verbatim.
pub struct ConversionEngine<C, R> {
    resolver: RateResolver<C, R>,
}

impl<C: CurrencyDirectory, R: RateStore> ConversionEngine<C, R> {
    /// Creates a conversion engine over the given collaborators.
    #[must_use]
    pub fn new(directory: Arc<C>, rates: Arc<R>) -> Self {
        Self {
            resolver: RateResolver::new(directory, rates),
        }
    }

    /// Converts `amount` from `base` to `target`.
    ///
    /// # Errors
    ///
    /// Propagates the resolver's `ExchangeError` unchanged.
    pub async fn convert(
        &self,
        base: &Currency,
        target: &Currency,
        amount: Decimal,
    ) -> Result<Conversion, ExchangeError> {
        let resolved = self.resolver.resolve(base, target).await?;

        Ok(Conversion {
            base: base.clone(),
            target: target.clone(),
            rate: resolved.rate,
            amount,
            converted_amount: convert_amount(amount, resolved.rate),
        })
    }
}

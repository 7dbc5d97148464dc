//! Rate resolution: the direct / reverse / cross fallback chain.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::ExchangeError;
use super::round_half_even;
use super::store::{CurrencyDirectory, RateStore};
use super::types::{Currency, RateOrigin, ResolvedRate};

/// Code of the pivot currency used for cross rates.
///
/// Keeping only pivot-relative rates stored lets the system answer any pair
/// query with O(n) rows, at the cost of one extra decimal division.
pub const PIVOT_CODE: &str = "USD";

/// Resolves an effective exchange rate for a currency pair.
///
/// Stateless and reentrant: each call performs read-only collaborator
/// lookups plus local decimal arithmetic. Collaborators are injected
/// explicitly; there is no ambient state.
pub struct RateResolver<C, R> {
    directory: Arc<C>,
    rates: Arc<R>,
}

impl<C: CurrencyDirectory, R: RateStore> RateResolver<C, R> {
    /// Creates a resolver over the given collaborators.
    #[must_use]
    pub fn new(directory: Arc<C>, rates: Arc<R>) -> Self {
        Self { directory, rates }
    }

    /// Resolves the effective rate from `base` to `target`.
    ///
    /// Both currencies must already be validated to exist. The fallback
    /// chain is ordered; the first success wins:
    ///
    /// 1. Direct: the stored rate for (base, target), returned unchanged.
    /// 2. Reverse: the stored rate for (target, base), inverted and rounded
    ///    half-even. The result keeps the stored row's id and pair for
    ///    response shaping; the inverted value is never persisted.
    /// 3. Cross: `pivot->target / pivot->base`, rounded half-even, with no
    ///    stored identity. Requires both pivot legs as exact ordered pairs.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::CurrencyNotFound` if the pivot currency is
    /// absent, or `ExchangeError::RateNotFound` naming the specific missing
    /// pivot pair. Storage failures propagate unchanged.
    pub async fn resolve(
        &self,
        base: &Currency,
        target: &Currency,
    ) -> Result<ResolvedRate, ExchangeError> {
        if let Some(direct) = self.rates.find_by_pair(base.id, target.id).await? {
            return Ok(ResolvedRate {
                id: Some(direct.id),
                base_currency_id: direct.base_currency_id,
                target_currency_id: direct.target_currency_id,
                rate: direct.rate,
                origin: RateOrigin::Direct,
            });
        }

        if let Some(reverse) = self.rates.find_by_pair(target.id, base.id).await? {
            return Ok(ResolvedRate {
                id: Some(reverse.id),
                base_currency_id: reverse.base_currency_id,
                target_currency_id: reverse.target_currency_id,
                rate: round_half_even(Decimal::ONE / reverse.rate),
                origin: RateOrigin::Inverted,
            });
        }

        self.resolve_cross(base, target).await
    }

    /// Derives a rate through the pivot currency.
    async fn resolve_cross(
        &self,
        base: &Currency,
        target: &Currency,
    ) -> Result<ResolvedRate, ExchangeError> {
        let pivot = self
            .directory
            .find_by_code(PIVOT_CODE)
            .await?
            .ok_or_else(|| ExchangeError::CurrencyNotFound(PIVOT_CODE.to_string()))?;

        let pivot_to_base = self
            .rates
            .find_by_pair(pivot.id, base.id)
            .await?
            .ok_or_else(|| ExchangeError::rate_not_found(PIVOT_CODE, &base.code))?;

        let pivot_to_target = self
            .rates
            .find_by_pair(pivot.id, target.id)
            .await?
            .ok_or_else(|| ExchangeError::rate_not_found(PIVOT_CODE, &target.code))?;

        Ok(ResolvedRate {
            id: None,
            base_currency_id: base.id,
            target_currency_id: target.id,
            rate: round_half_even(pivot_to_target.rate / pivot_to_base.rate),
            origin: RateOrigin::Cross,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::testing::MemoryStore;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn resolver(store: &Arc<MemoryStore>) -> RateResolver<MemoryStore, MemoryStore> {
        RateResolver::new(Arc::clone(store), Arc::clone(store))
    }

    fn pivot_store() -> Arc<MemoryStore> {
        // USD(1), EUR(2), JPY(3); USD->EUR = 0.9000, USD->JPY = 150.0000
        MemoryStore::new()
            .with_currency(1, "USD", "US Dollar", "$")
            .with_currency(2, "EUR", "Euro", "€")
            .with_currency(3, "JPY", "Japanese Yen", "¥")
            .with_rate(10, 1, 2, dec!(0.9000))
            .with_rate(11, 1, 3, dec!(150.0000))
            .shared()
    }

    #[tokio::test]
    async fn direct_rate_returned_unchanged() {
        let store = pivot_store();
        let (usd, eur) = (store.currency("USD"), store.currency("EUR"));

        let resolved = resolver(&store).resolve(&usd, &eur).await.unwrap();

        assert_eq!(resolved.origin, RateOrigin::Direct);
        assert_eq!(resolved.id, Some(10));
        assert_eq!(resolved.rate, dec!(0.9000));
        assert_eq!(resolved.base_currency_id, 1);
        assert_eq!(resolved.target_currency_id, 2);
    }

    #[tokio::test]
    async fn direct_takes_priority_over_reverse() {
        let store = MemoryStore::new()
            .with_currency(1, "USD", "US Dollar", "$")
            .with_currency(2, "EUR", "Euro", "€")
            .with_rate(1, 1, 2, dec!(0.9000))
            .with_rate(2, 2, 1, dec!(1.2000))
            .shared();
        let (usd, eur) = (store.currency("USD"), store.currency("EUR"));

        let resolved = resolver(&store).resolve(&usd, &eur).await.unwrap();

        assert_eq!(resolved.origin, RateOrigin::Direct);
        assert_eq!(resolved.rate, dec!(0.9000));
    }

    #[tokio::test]
    async fn reverse_rate_is_inverted_and_rounded() {
        // Only EUR->USD = 1.1000 is stored; USD->EUR must come out as
        // round(1/1.1000, 4, half-even) = 0.9091
        let store = MemoryStore::new()
            .with_currency(1, "USD", "US Dollar", "$")
            .with_currency(2, "EUR", "Euro", "€")
            .with_rate(7, 2, 1, dec!(1.1000))
            .shared();
        let (usd, eur) = (store.currency("USD"), store.currency("EUR"));

        let resolved = resolver(&store).resolve(&usd, &eur).await.unwrap();

        assert_eq!(resolved.origin, RateOrigin::Inverted);
        assert_eq!(resolved.rate, dec!(0.9091));
        // Carries the stored row's id and pair, not the requested direction
        assert_eq!(resolved.id, Some(7));
        assert_eq!(resolved.base_currency_id, 2);
        assert_eq!(resolved.target_currency_id, 1);
    }

    #[tokio::test]
    async fn forward_and_reverse_compose_to_one_within_a_rounding_unit() {
        let store = MemoryStore::new()
            .with_currency(1, "USD", "US Dollar", "$")
            .with_currency(2, "EUR", "Euro", "€")
            .with_rate(1, 2, 1, dec!(1.1000))
            .shared();
        let (usd, eur) = (store.currency("USD"), store.currency("EUR"));
        let r = resolver(&store);

        let forward = r.resolve(&eur, &usd).await.unwrap().rate;
        let reverse = r.resolve(&usd, &eur).await.unwrap().rate;

        let product = forward * reverse;
        assert!((product - Decimal::ONE).abs() <= dec!(0.0001));
    }

    #[tokio::test]
    async fn cross_rate_via_pivot() {
        let store = pivot_store();
        let (eur, jpy) = (store.currency("EUR"), store.currency("JPY"));

        let resolved = resolver(&store).resolve(&eur, &jpy).await.unwrap();

        // round(150.0000 / 0.9000, 4, half-even) = 166.6667
        assert_eq!(resolved.origin, RateOrigin::Cross);
        assert_eq!(resolved.rate, dec!(166.6667));
        assert_eq!(resolved.id, None);
        assert_eq!(resolved.base_currency_id, 2);
        assert_eq!(resolved.target_currency_id, 3);
    }

    #[tokio::test]
    async fn cross_fails_when_pivot_currency_missing() {
        let store = MemoryStore::new()
            .with_currency(2, "EUR", "Euro", "€")
            .with_currency(3, "JPY", "Japanese Yen", "¥")
            .shared();
        let (eur, jpy) = (store.currency("EUR"), store.currency("JPY"));

        let err = resolver(&store).resolve(&eur, &jpy).await.unwrap_err();

        assert_eq!(err, ExchangeError::CurrencyNotFound("USD".to_string()));
    }

    #[tokio::test]
    async fn cross_fails_naming_missing_base_leg() {
        let store = MemoryStore::new()
            .with_currency(1, "USD", "US Dollar", "$")
            .with_currency(2, "EUR", "Euro", "€")
            .with_currency(3, "JPY", "Japanese Yen", "¥")
            .with_rate(11, 1, 3, dec!(150.0000))
            .shared();
        let (eur, jpy) = (store.currency("EUR"), store.currency("JPY"));

        let err = resolver(&store).resolve(&eur, &jpy).await.unwrap_err();

        assert_eq!(err, ExchangeError::rate_not_found("USD", "EUR"));
    }

    #[tokio::test]
    async fn cross_fails_naming_missing_target_leg() {
        let store = MemoryStore::new()
            .with_currency(1, "USD", "US Dollar", "$")
            .with_currency(2, "EUR", "Euro", "€")
            .with_currency(3, "JPY", "Japanese Yen", "¥")
            .with_rate(10, 1, 2, dec!(0.9000))
            .shared();
        let (eur, jpy) = (store.currency("EUR"), store.currency("JPY"));

        let err = resolver(&store).resolve(&eur, &jpy).await.unwrap_err();

        assert_eq!(err, ExchangeError::rate_not_found("USD", "JPY"));
    }

    #[tokio::test]
    async fn reverse_leg_is_not_used_for_cross_legs() {
        // EUR->USD stored, but the cross step requires the exact ordered
        // pair USD->EUR; the leg lookup must not invert.
        let store = MemoryStore::new()
            .with_currency(1, "USD", "US Dollar", "$")
            .with_currency(2, "EUR", "Euro", "€")
            .with_currency(3, "JPY", "Japanese Yen", "¥")
            .with_rate(10, 2, 1, dec!(1.1000))
            .with_rate(11, 1, 3, dec!(150.0000))
            .shared();
        let (eur, jpy) = (store.currency("EUR"), store.currency("JPY"));

        let err = resolver(&store).resolve(&eur, &jpy).await.unwrap_err();

        assert_eq!(err, ExchangeError::rate_not_found("USD", "EUR"));
    }

    #[tokio::test]
    async fn resolve_is_idempotent() {
        let store = pivot_store();
        let (eur, jpy) = (store.currency("EUR"), store.currency("JPY"));
        let r = resolver(&store);

        let first = r.resolve(&eur, &jpy).await.unwrap();
        let second = r.resolve(&eur, &jpy).await.unwrap();

        assert_eq!(first, second);
    }

    fn rate_strategy() -> impl Strategy<Value = Decimal> {
        // Positive rates at the stored scale
        (1i64..5_000_000i64).prop_map(|n| Decimal::new(n, 4))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// A stored direct rate always wins over a stored reverse rate and
        /// is returned without rounding.
        #[test]
        fn prop_direct_rate_priority(direct in rate_strategy(), reverse in rate_strategy()) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let store = MemoryStore::new()
                    .with_currency(1, "USD", "US Dollar", "$")
                    .with_currency(2, "EUR", "Euro", "€")
                    .with_rate(1, 1, 2, direct)
                    .with_rate(2, 2, 1, reverse)
                    .shared();
                let (usd, eur) = (store.currency("USD"), store.currency("EUR"));

                let resolved = resolver(&store).resolve(&usd, &eur).await.unwrap();
                prop_assert_eq!(resolved.origin, RateOrigin::Direct);
                prop_assert_eq!(resolved.rate, direct);
                Ok(())
            })?;
        }

        /// With only the reverse pair stored, the resolved rate equals the
        /// half-even rounded inverse.
        #[test]
        fn prop_reverse_rate_inverts(stored in rate_strategy()) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let store = MemoryStore::new()
                    .with_currency(1, "USD", "US Dollar", "$")
                    .with_currency(2, "EUR", "Euro", "€")
                    .with_rate(1, 2, 1, stored)
                    .shared();
                let (usd, eur) = (store.currency("USD"), store.currency("EUR"));

                let resolved = resolver(&store).resolve(&usd, &eur).await.unwrap();
                prop_assert_eq!(resolved.origin, RateOrigin::Inverted);
                prop_assert_eq!(resolved.rate, round_half_even(Decimal::ONE / stored));
                Ok(())
            })?;
        }
    }
}

//! Exchange rate repository for database operations.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{currencies, exchange_rates};
use cambio_core::currency::{ExchangeError, ExchangeRate, RateStore, round_half_even};

/// Error types for exchange rate operations.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeRateError {
    /// Rate must be positive.
    #[error("Exchange rate must be positive")]
    NonPositiveRate,

    /// The ordered pair already has a stored rate.
    #[error("Currency pair already exists")]
    AlreadyExists,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for inserting an exchange rate row.
#[derive(Debug, Clone)]
pub struct CreateExchangeRateInput {
    /// Base currency identity.
    pub base_currency_id: i64,
    /// Target currency identity.
    pub target_currency_id: i64,
    /// Positive rate; rounded to the stored scale before writing.
    pub rate: Decimal,
}

/// An exchange rate row joined with both currency rows.
#[derive(Debug, Clone)]
pub struct RateWithCurrencies {
    /// The stored rate row.
    pub rate: exchange_rates::Model,
    /// The base currency row.
    pub base: currencies::Model,
    /// The target currency row.
    pub target: currencies::Model,
}

/// Exchange rate repository for pair lookup, insert, and rate replacement.
#[derive(Debug, Clone)]
pub struct ExchangeRateRepository {
    db: DatabaseConnection,
}

impl ExchangeRateRepository {
    /// Creates a new exchange rate repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the stored rate for the exact ordered pair. Absence is `Ok(None)`.
    ///
    /// The reversed pair is deliberately not tried here; that is the
    /// resolver's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_pair(
        &self,
        base_currency_id: i64,
        target_currency_id: i64,
    ) -> Result<Option<exchange_rates::Model>, ExchangeRateError> {
        let model = exchange_rates::Entity::find()
            .filter(exchange_rates::Column::BaseCurrencyId.eq(base_currency_id))
            .filter(exchange_rates::Column::TargetCurrencyId.eq(target_currency_id))
            .one(&self.db)
            .await?;

        Ok(model)
    }

    /// Lists all stored rates joined with their currency rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a foreign key
    /// dangles (which the schema prevents).
    pub async fn list_with_currencies(&self) -> Result<Vec<RateWithCurrencies>, ExchangeRateError> {
        let rates = exchange_rates::Entity::find()
            .order_by_asc(exchange_rates::Column::Id)
            .all(&self.db)
            .await?;

        let currency_map: HashMap<i64, currencies::Model> = currencies::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut rows = Vec::with_capacity(rates.len());
        for rate in rates {
            let base = currency_map
                .get(&rate.base_currency_id)
                .cloned()
                .ok_or_else(|| missing_currency(rate.base_currency_id, rate.id))?;
            let target = currency_map
                .get(&rate.target_currency_id)
                .cloned()
                .ok_or_else(|| missing_currency(rate.target_currency_id, rate.id))?;
            rows.push(RateWithCurrencies { rate, base, target });
        }

        Ok(rows)
    }

    /// Inserts a new rate row, assigning its identity.
    ///
    /// Pair uniqueness is checked by the caller against `find_by_pair`; the
    /// unique constraint backs it up.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveRate` for a zero or negative rate, and
    /// `AlreadyExists` if the pair gained a row since the caller's check.
    pub async fn create(
        &self,
        input: CreateExchangeRateInput,
    ) -> Result<exchange_rates::Model, ExchangeRateError> {
        if input.rate <= Decimal::ZERO {
            return Err(ExchangeRateError::NonPositiveRate);
        }

        let rate = exchange_rates::ActiveModel {
            base_currency_id: Set(input.base_currency_id),
            target_currency_id: Set(input.target_currency_id),
            rate: Set(round_half_even(input.rate)),
            ..Default::default()
        };

        match rate.insert(&self.db).await {
            Ok(created) => Ok(created),
            Err(e) if super::is_unique_violation(&e) => Err(ExchangeRateError::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the rate value of an existing row, preserving id and pair.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveRate` for a zero or negative rate.
    pub async fn replace_rate(
        &self,
        existing: exchange_rates::Model,
        new_rate: Decimal,
    ) -> Result<exchange_rates::Model, ExchangeRateError> {
        if new_rate <= Decimal::ZERO {
            return Err(ExchangeRateError::NonPositiveRate);
        }

        let mut active: exchange_rates::ActiveModel = existing.into();
        active.rate = Set(round_half_even(new_rate));

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }
}

fn missing_currency(currency_id: i64, rate_id: i64) -> ExchangeRateError {
    ExchangeRateError::Database(DbErr::Custom(format!(
        "currency {currency_id} referenced by exchange rate {rate_id} is missing"
    )))
}

impl RateStore for ExchangeRateRepository {
    async fn find_by_pair(
        &self,
        base_id: i64,
        target_id: i64,
    ) -> Result<Option<ExchangeRate>, ExchangeError> {
        exchange_rates::Entity::find()
            .filter(exchange_rates::Column::BaseCurrencyId.eq(base_id))
            .filter(exchange_rates::Column::TargetCurrencyId.eq(target_id))
            .one(&self.db)
            .await
            .map(|model| model.map(ExchangeRate::from))
            .map_err(|e| ExchangeError::storage(e.to_string()))
    }
}

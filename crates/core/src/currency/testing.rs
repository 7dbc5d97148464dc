//! In-memory collaborator implementations for unit tests.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::ExchangeError;
use super::store::{CurrencyDirectory, RateStore};
use super::types::{Currency, ExchangeRate};

/// In-memory currency directory and rate store backing resolver tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    currencies: Vec<Currency>,
    rates: Vec<ExchangeRate>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency(mut self, id: i64, code: &str, name: &str, sign: &str) -> Self {
        self.currencies.push(Currency {
            id,
            code: code.to_string(),
            name: name.to_string(),
            sign: sign.to_string(),
        });
        self
    }

    pub fn with_rate(mut self, id: i64, base_id: i64, target_id: i64, rate: Decimal) -> Self {
        self.rates.push(ExchangeRate {
            id,
            base_currency_id: base_id,
            target_currency_id: target_id,
            rate,
        });
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn currency(&self, code: &str) -> Currency {
        self.currencies
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .unwrap_or_else(|| panic!("test currency {code} not registered"))
    }
}

impl CurrencyDirectory for MemoryStore {
    async fn find_by_code(&self, code: &str) -> Result<Option<Currency>, ExchangeError> {
        Ok(self.currencies.iter().find(|c| c.code == code).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>, ExchangeError> {
        Ok(self.currencies.iter().find(|c| c.id == id).cloned())
    }
}

impl RateStore for MemoryStore {
    async fn find_by_pair(
        &self,
        base_id: i64,
        target_id: i64,
    ) -> Result<Option<ExchangeRate>, ExchangeError> {
        Ok(self
            .rates
            .iter()
            .find(|r| r.base_currency_id == base_id && r.target_currency_id == target_id)
            .cloned())
    }
}

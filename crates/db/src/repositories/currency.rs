//! Currency repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::currencies;
use cambio_core::currency::{Currency, CurrencyDirectory, ExchangeError};

/// Error types for currency operations.
#[derive(Debug, thiserror::Error)]
pub enum CurrencyError {
    /// The code uniqueness invariant would be violated.
    #[error("Currency with code {0} already exists")]
    AlreadyExists(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a currency.
///
/// Fields are expected to be validated (lengths, uppercase code) before
/// reaching the repository.
#[derive(Debug, Clone)]
pub struct CreateCurrencyInput {
    /// 3-letter uppercase code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Currency sign.
    pub sign: String,
}

/// Currency repository for directory operations.
#[derive(Debug, Clone)]
pub struct CurrencyRepository {
    db: DatabaseConnection,
}

impl CurrencyRepository {
    /// Creates a new currency repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all currencies in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<currencies::Model>, CurrencyError> {
        let models = currencies::Entity::find()
            .order_by_asc(currencies::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models)
    }

    /// Finds a currency by its code. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<currencies::Model>, CurrencyError> {
        let model = currencies::Entity::find()
            .filter(currencies::Column::Code.eq(code))
            .one(&self.db)
            .await?;

        Ok(model)
    }

    /// Finds a currency by its storage identity. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<currencies::Model>, CurrencyError> {
        let model = currencies::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model)
    }

    /// Inserts a new currency, assigning its identity.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a currency with the same code is present.
    pub async fn create(&self, input: CreateCurrencyInput) -> Result<currencies::Model, CurrencyError> {
        if self.find_by_code(&input.code).await?.is_some() {
            return Err(CurrencyError::AlreadyExists(input.code));
        }

        let code = input.code.clone();
        let currency = currencies::ActiveModel {
            code: Set(input.code),
            name: Set(input.name),
            sign: Set(input.sign),
            ..Default::default()
        };

        // A concurrent insert can slip past the pre-check; the unique
        // constraint then reports the duplicate.
        match currency.insert(&self.db).await {
            Ok(created) => Ok(created),
            Err(e) if super::is_unique_violation(&e) => Err(CurrencyError::AlreadyExists(code)),
            Err(e) => Err(e.into()),
        }
    }
}

impl CurrencyDirectory for CurrencyRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Currency>, ExchangeError> {
        currencies::Entity::find()
            .filter(currencies::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map(|model| model.map(Currency::from))
            .map_err(|e| ExchangeError::storage(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>, ExchangeError> {
        currencies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map(|model| model.map(Currency::from))
            .map_err(|e| ExchangeError::storage(e.to_string()))
    }
}

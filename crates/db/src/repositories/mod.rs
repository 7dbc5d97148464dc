//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! They also implement the core crate's collaborator traits so the rate
//! resolver can read through them.

pub mod currency;
pub mod exchange_rate;

use sea_orm::{DbErr, SqlErr};

/// True when the error is the database rejecting a duplicate key.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_sql_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&DbErr::Custom("boom".to_string())));
        assert!(!is_unique_violation(&DbErr::RecordNotUpdated));
    }
}

pub use currency::{CreateCurrencyInput, CurrencyError, CurrencyRepository};
pub use exchange_rate::{
    CreateExchangeRateInput, ExchangeRateError, ExchangeRateRepository, RateWithCurrencies,
};

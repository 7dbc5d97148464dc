//! `SeaORM` entity definitions.

pub mod currencies;
pub mod exchange_rates;

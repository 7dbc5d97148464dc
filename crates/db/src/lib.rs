//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for currencies and exchange rates
//! - Repository abstractions for data access
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{CurrencyRepository, ExchangeRateRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Default pool bounds for the standalone binaries (migrator, seeder).
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;

/// Establishes a database connection with default pool bounds.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_with(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_MIN_CONNECTIONS).await
}

/// Establishes a database connection with the given pool bounds.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(
    database_url: &str,
    max_connections: u32,
    min_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    Database::connect(pool_options(database_url, max_connections, min_connections)).await
}

fn pool_options(database_url: &str, max_connections: u32, min_connections: u32) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .min_connections(min_connections);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_carry_bounds() {
        let options = pool_options("postgres://localhost/cambio", 20, 2);
        assert_eq!(options.get_url(), "postgres://localhost/cambio");
        assert_eq!(options.get_max_connections(), Some(20));
        assert_eq!(options.get_min_connections(), Some(2));
    }
}

//! Initial database migration.
//!
//! Creates the currencies and exchange_rates tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(CURRENCIES_SQL).await?;
        db.execute_unprepared(EXCHANGE_RATES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const CURRENCIES_SQL: &str = r"
CREATE TABLE currencies (
    id BIGSERIAL PRIMARY KEY,
    code VARCHAR(3) NOT NULL UNIQUE,
    name VARCHAR(50) NOT NULL,
    sign VARCHAR(5) NOT NULL,
    CONSTRAINT chk_currency_code CHECK (code ~ '^[A-Z]{3}$')
);
";

const EXCHANGE_RATES_SQL: &str = r"
CREATE TABLE exchange_rates (
    id BIGSERIAL PRIMARY KEY,
    base_currency_id BIGINT NOT NULL REFERENCES currencies(id),
    target_currency_id BIGINT NOT NULL REFERENCES currencies(id),
    rate NUMERIC(19, 4) NOT NULL,
    CONSTRAINT chk_rate_positive CHECK (rate > 0),
    UNIQUE (base_currency_id, target_currency_id)
);

CREATE INDEX idx_exchange_rates_pair ON exchange_rates(base_currency_id, target_currency_id);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS exchange_rates;
DROP TABLE IF EXISTS currencies;
";

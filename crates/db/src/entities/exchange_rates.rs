//! `SeaORM` Entity for the exchange_rates table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use cambio_core::currency::ExchangeRate;

/// A stored exchange rate for an ordered currency pair.
///
/// At most one row exists per (base, target) pair; the rate value is the
/// only mutable column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "exchange_rates")]
pub struct Model {
    /// Storage-assigned identity.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Base currency of the ordered pair.
    pub base_currency_id: i64,
    /// Target currency of the ordered pair.
    pub target_currency_id: i64,
    /// Positive rate, persisted at scale 4.
    pub rate: Decimal,
}

/// Foreign keys into the currencies table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The base currency row.
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::BaseCurrencyId",
        to = "super::currencies::Column::Id"
    )]
    BaseCurrency,
    /// The target currency row.
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::TargetCurrencyId",
        to = "super::currencies::Column::Id"
    )]
    TargetCurrency,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExchangeRate {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            base_currency_id: model.base_currency_id,
            target_currency_id: model.target_currency_id,
            rate: model.rate,
        }
    }
}

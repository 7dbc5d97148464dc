//! `SeaORM` Entity for the currencies table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use cambio_core::currency::Currency;

/// A currency row. Append-only: rows are never updated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "currencies")]
pub struct Model {
    /// Storage-assigned identity.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 3-letter uppercase code, unique.
    #[sea_orm(unique)]
    pub code: String,
    /// Display name.
    pub name: String,
    /// Currency sign.
    pub sign: String,
}

/// Relations are declared on `exchange_rates`, which references this table
/// twice (base and target); a single `has_many` here would be ambiguous.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Currency {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            sign: model.sign,
        }
    }
}

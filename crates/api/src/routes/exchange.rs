//! Amount conversion route: the sole runtime caller of the fallback chain.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError, params, routes::currencies::CurrencyResponse};
use cambio_core::currency::{Conversion, ConversionEngine};
use cambio_db::repositories::{CurrencyRepository, ExchangeRateRepository};
use crate::routes::exchange_rates::find_currency_pair;

/// Creates the conversion route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/exchange", get(exchange))
}

/// Query parameters for a conversion request.
#[derive(Debug, Deserialize)]
pub struct ExchangeQuery {
    /// Base currency code.
    #[serde(default)]
    pub from: String,
    /// Target currency code.
    #[serde(default)]
    pub to: String,
    /// Amount to convert, in the base currency.
    #[serde(default)]
    pub amount: String,
}

/// Response body for a conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponse {
    /// The base currency.
    pub base_currency: CurrencyResponse,
    /// The target currency.
    pub target_currency: CurrencyResponse,
    /// The effective exchange rate.
    pub rate: Decimal,
    /// The requested amount.
    pub amount: Decimal,
    /// The converted amount, rounded half-even at scale 4.
    pub converted_amount: Decimal,
}

impl From<Conversion> for ExchangeResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            base_currency: CurrencyResponse {
                id: conversion.base.id,
                name: conversion.base.name,
                code: conversion.base.code,
                sign: conversion.base.sign,
            },
            target_currency: CurrencyResponse {
                id: conversion.target.id,
                name: conversion.target.name,
                code: conversion.target.code,
                sign: conversion.target.sign,
            },
            rate: conversion.rate,
            amount: conversion.amount,
            converted_amount: conversion.converted_amount,
        }
    }
}

/// GET `/exchange?from=&to=&amount=` - Convert an amount between currencies.
async fn exchange(
    State(state): State<AppState>,
    Query(query): Query<ExchangeQuery>,
) -> Result<Json<ExchangeResponse>, ApiError> {
    let from_code = params::parse_currency_code(&query.from)?;
    let to_code = params::parse_currency_code(&query.to)?;
    let amount = params::parse_decimal("amount", &query.amount)?;

    let (base, target) = find_currency_pair(&state.db, &from_code, &to_code).await?;

    let directory = Arc::new(CurrencyRepository::new((*state.db).clone()));
    let rates = Arc::new(ExchangeRateRepository::new((*state.db).clone()));
    let engine = ConversionEngine::new(directory, rates);

    let conversion = engine
        .convert(&base.into(), &target.into(), amount)
        .await?;

    Ok(Json(conversion.into()))
}

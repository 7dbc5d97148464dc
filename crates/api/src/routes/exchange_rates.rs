//! Exchange rate CRUD routes.
//!
//! These routes operate on exact ordered pairs only; the fallback chain is
//! reserved for the conversion endpoint.

use axum::{
    Json, Router,
    extract::{Form, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, params, routes::currencies::CurrencyResponse};
use cambio_db::entities::{currencies, exchange_rates};
use cambio_db::repositories::{
    CreateExchangeRateInput, CurrencyRepository, ExchangeRateRepository,
};
use cambio_shared::AppError;

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/exchangeRates",
            get(list_exchange_rates).post(create_exchange_rate),
        )
        .route(
            "/exchangeRate/{pair}",
            get(get_exchange_rate).patch(update_exchange_rate),
        )
}

/// Response body for a stored exchange rate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    /// Storage-assigned identity.
    pub id: i64,
    /// The base currency.
    pub base_currency: CurrencyResponse,
    /// The target currency.
    pub target_currency: CurrencyResponse,
    /// The stored rate.
    pub rate: Decimal,
}

impl ExchangeRateResponse {
    fn new(
        rate: exchange_rates::Model,
        base: currencies::Model,
        target: currencies::Model,
    ) -> Self {
        Self {
            id: rate.id,
            base_currency: base.into(),
            target_currency: target.into(),
            rate: rate.rate,
        }
    }
}

/// Form body for creating an exchange rate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExchangeRateForm {
    /// Base currency code.
    #[serde(default)]
    pub base_currency_code: String,
    /// Target currency code.
    #[serde(default)]
    pub target_currency_code: String,
    /// Positive decimal rate.
    #[serde(default)]
    pub rate: String,
}

/// Form body for replacing a stored rate value.
#[derive(Debug, Deserialize)]
pub struct UpdateExchangeRateForm {
    /// Positive decimal rate.
    #[serde(default)]
    pub rate: String,
}

/// GET `/exchangeRates` - List all stored rates with their currencies.
async fn list_exchange_rates(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExchangeRateResponse>>, ApiError> {
    let repo = ExchangeRateRepository::new((*state.db).clone());
    let rows = repo.list_with_currencies().await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| ExchangeRateResponse::new(row.rate, row.base, row.target))
            .collect(),
    ))
}

/// GET `/exchangeRate/{pair}` - Look up the stored rate for an ordered pair.
///
/// `pair` is a 6-letter segment with no separator, split 3/3.
async fn get_exchange_rate(
    State(state): State<AppState>,
    Path(pair): Path<String>,
) -> Result<Json<ExchangeRateResponse>, ApiError> {
    let (base_code, target_code) = params::parse_pair_path(&pair)?;

    let (base, target) = find_currency_pair(&state.db, &base_code, &target_code).await?;

    let repo = ExchangeRateRepository::new((*state.db).clone());
    let rate = repo
        .find_by_pair(base.id, target.id)
        .await?
        .ok_or_else(|| pair_not_found(&base_code, &target_code))?;

    Ok(Json(ExchangeRateResponse::new(rate, base, target)))
}

/// POST `/exchangeRates` - Create a direct rate row for an ordered pair.
async fn create_exchange_rate(
    State(state): State<AppState>,
    Form(form): Form<CreateExchangeRateForm>,
) -> Result<impl IntoResponse, ApiError> {
    let base_code = params::parse_currency_code(&form.base_currency_code)?;
    let target_code = params::parse_currency_code(&form.target_currency_code)?;
    let rate = params::parse_rate(&form.rate)?;

    let (base, target) = find_currency_pair(&state.db, &base_code, &target_code).await?;

    let repo = ExchangeRateRepository::new((*state.db).clone());
    if repo.find_by_pair(base.id, target.id).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Currency pair with code {base_code}-{target_code} already exists"
        ))
        .into());
    }

    let created = repo
        .create(CreateExchangeRateInput {
            base_currency_id: base.id,
            target_currency_id: target.id,
            rate,
        })
        .await?;

    info!(
        base = %base_code,
        target = %target_code,
        rate = %created.rate,
        "Exchange rate created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ExchangeRateResponse::new(created, base, target)),
    ))
}

/// PATCH `/exchangeRate/{pair}` - Replace the stored rate value.
///
/// The row must already exist; PATCH does not create.
async fn update_exchange_rate(
    State(state): State<AppState>,
    Path(pair): Path<String>,
    Form(form): Form<UpdateExchangeRateForm>,
) -> Result<Json<ExchangeRateResponse>, ApiError> {
    let (base_code, target_code) = params::parse_pair_path(&pair)?;
    let rate = params::parse_rate(&form.rate)?;

    let (base, target) = find_currency_pair(&state.db, &base_code, &target_code).await?;

    let repo = ExchangeRateRepository::new((*state.db).clone());
    let existing = repo
        .find_by_pair(base.id, target.id)
        .await?
        .ok_or_else(|| pair_not_found(&base_code, &target_code))?;

    let updated = repo.replace_rate(existing, rate).await?;

    info!(
        base = %base_code,
        target = %target_code,
        rate = %updated.rate,
        "Exchange rate replaced"
    );

    Ok(Json(ExchangeRateResponse::new(updated, base, target)))
}

/// Looks up both currencies of a pair, failing with 404 naming the first
/// missing code.
pub(crate) async fn find_currency_pair(
    db: &DatabaseConnection,
    base_code: &str,
    target_code: &str,
) -> Result<(currencies::Model, currencies::Model), ApiError> {
    let repo = CurrencyRepository::new(db.clone());

    let base = repo
        .find_by_code(base_code)
        .await?
        .ok_or_else(|| currency_not_found(base_code))?;
    let target = repo
        .find_by_code(target_code)
        .await?
        .ok_or_else(|| currency_not_found(target_code))?;

    Ok((base, target))
}

fn currency_not_found(code: &str) -> ApiError {
    AppError::NotFound(format!("Currency with code {code} not found")).into()
}

fn pair_not_found(base_code: &str, target_code: &str) -> ApiError {
    AppError::NotFound(format!(
        "Exchange rate with code pair {base_code}-{target_code} not found"
    ))
    .into()
}

//! Currency directory routes.

use axum::{
    Json, Router,
    extract::{Form, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, params};
use cambio_db::entities::currencies;
use cambio_db::repositories::{CreateCurrencyInput, CurrencyRepository};
use cambio_shared::AppError;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies).post(create_currency))
        .route("/currency/{code}", get(get_currency))
}

/// Response body for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Storage-assigned identity.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// 3-letter uppercase code.
    pub code: String,
    /// Currency sign.
    pub sign: String,
}

impl From<currencies::Model> for CurrencyResponse {
    fn from(model: currencies::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            sign: model.sign,
        }
    }
}

/// Form body for creating a currency.
#[derive(Debug, Deserialize)]
pub struct CreateCurrencyForm {
    /// Display name, at most 50 characters.
    #[serde(default)]
    pub name: String,
    /// 3-letter code.
    #[serde(default)]
    pub code: String,
    /// Currency sign, at most 5 characters.
    #[serde(default)]
    pub sign: String,
}

/// GET `/currencies` - List all currencies.
async fn list_currencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrencyResponse>>, ApiError> {
    let repo = CurrencyRepository::new((*state.db).clone());
    let models = repo.list().await?;

    Ok(Json(models.into_iter().map(Into::into).collect()))
}

/// GET `/currency/{code}` - Look up one currency by code.
async fn get_currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CurrencyResponse>, ApiError> {
    let code = params::parse_currency_code(&code)?;

    let repo = CurrencyRepository::new((*state.db).clone());
    let model = repo
        .find_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Currency with code {code} not found")))?;

    Ok(Json(model.into()))
}

/// POST `/currencies` - Create a currency.
async fn create_currency(
    State(state): State<AppState>,
    Form(form): Form<CreateCurrencyForm>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateCurrencyInput {
        code: params::parse_currency_code(&form.code)?,
        name: params::parse_currency_name(&form.name)?,
        sign: params::parse_currency_sign(&form.sign)?,
    };

    let repo = CurrencyRepository::new((*state.db).clone());
    let created = repo.create(input).await?;

    info!(code = %created.code, id = created.id, "Currency created");

    Ok((
        StatusCode::CREATED,
        Json(CurrencyResponse::from(created)),
    ))
}

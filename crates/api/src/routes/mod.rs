//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod currencies;
pub mod exchange;
pub mod exchange_rates;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(exchange_rates::routes())
        .merge(exchange::routes())
}

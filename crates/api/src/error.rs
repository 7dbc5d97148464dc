//! The error-to-response boundary.
//!
//! Internal failure kinds are mapped to transport status codes exactly once,
//! here. Handlers return `Result<_, ApiError>` and never build error
//! responses themselves.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use cambio_core::currency::ExchangeError;
use cambio_db::repositories::{CurrencyError, ExchangeRateError};
use cambio_shared::AppError;

/// Wrapper carrying an `AppError` to the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ExchangeError> for ApiError {
    fn from(err: ExchangeError) -> Self {
        let app = match &err {
            ExchangeError::CurrencyNotFound(_) | ExchangeError::RateNotFound { .. } => {
                AppError::NotFound(err.to_string())
            }
            ExchangeError::Storage(msg) => AppError::Database(msg.clone()),
        };
        Self(app)
    }
}

impl From<CurrencyError> for ApiError {
    fn from(err: CurrencyError) -> Self {
        let app = match &err {
            CurrencyError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
            CurrencyError::Database(inner) => AppError::Database(inner.to_string()),
        };
        Self(app)
    }
}

impl From<ExchangeRateError> for ApiError {
    fn from(err: ExchangeRateError) -> Self {
        let app = match &err {
            ExchangeRateError::NonPositiveRate => AppError::Validation(err.to_string()),
            ExchangeRateError::AlreadyExists => AppError::Conflict(err.to_string()),
            ExchangeRateError::Database(inner) => AppError::Database(inner.to_string()),
        };
        Self(app)
    }
}

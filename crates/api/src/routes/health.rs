//! Service health route.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health report, including database reachability.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service name.
    pub service: &'static str,
    /// "ok" when the database answers a ping, "degraded" otherwise.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

impl HealthResponse {
    fn new(db_reachable: bool) -> Self {
        Self {
            service: "cambio",
            status: if db_reachable { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// GET `/health` - Report service liveness and database reachability.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_reachable = state.db.ping().await.is_ok();
    let status = if db_reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(HealthResponse::new(db_reachable)))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report_shape() {
        let body = serde_json::to_value(HealthResponse::new(true)).unwrap();
        assert_eq!(body["service"], "cambio");
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }

    #[test]
    fn test_health_report_degraded_without_database() {
        let body = serde_json::to_value(HealthResponse::new(false)).unwrap();
        assert_eq!(body["status"], "degraded");
    }
}

//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Pings the visit counter store
/// 2. **Config**: Verifies `VISITS_TABLE` is set
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Store reachable" },
///     "config": { "status": "ok", "message": "Visits table: daily_visits" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = if state.stats_service.store_healthy().await {
        CheckStatus::ok("Store reachable")
    } else {
        CheckStatus::error("Store unreachable")
    };

    let config_check = match state.stats_service.visits_table() {
        Some(table) => CheckStatus::ok(format!("Visits table: {table}")),
        None => CheckStatus::error("VISITS_TABLE is not configured"),
    };

    let all_healthy = store_check.is_ok() && config_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            config: config_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

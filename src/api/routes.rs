//! API route configuration.

use crate::api::handlers::{missing_code_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Statistics routes.
///
/// # Endpoints
///
/// - `GET /stats/{codigo}` - Daily visit series for a code
/// - `GET /stats`          - Always 400: the code is required
pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(missing_code_handler))
        .route("/stats/{codigo}", get(stats_handler))
}

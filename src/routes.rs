//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`          - Store and configuration health
//! - `GET /stats/{codigo}`  - Daily visit series
//! - `GET /stats`           - 400, code required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/stats/` is `/stats`

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::stats_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

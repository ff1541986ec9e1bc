//! Handler for daily visit statistics.

use axum::{
    Json,
    extract::{Path, RawQuery, State},
};

use crate::api::dto::stats::{StatsQueryParams, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the gap-filled daily visit series for a code.
///
/// # Endpoint
///
/// `GET /stats/{codigo}`
///
/// # Query Parameters
///
/// - `from` (optional): First day, `YYYY-MM-DD`
/// - `to` (optional): Last day, `YYYY-MM-DD`
///
/// Missing or malformed bounds default to the 30 days ending today (UTC).
/// The query string is never rejected: a repeated key keeps its last value
/// and undecodable bytes simply fail date validation.
///
/// # Response
///
/// ```json
/// {
///   "code": "X",
///   "from": "2024-01-01",
///   "to": "2024-01-03",
///   "total": 8,
///   "series": [
///     { "date": "2024-01-01", "count": 3 },
///     { "date": "2024-01-02", "count": 0 },
///     { "date": "2024-01-03", "count": 5 }
///   ],
///   "rawItemsCount": 2
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the code is empty or `from > to`.
/// Returns 500 Internal Server Error if `VISITS_TABLE` is not configured or
/// the store query fails.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<StatsResponse>, AppError> {
    let params = StatsQueryParams::from_query(query.as_deref());

    let stats = state
        .stats_service
        .get_daily_stats(&code, params.from.as_deref(), params.to.as_deref())
        .await?;

    Ok(Json(stats.into()))
}

/// Answers `GET /stats` without a code.
///
/// Runs the same validation as [`stats_handler`] with an empty code, so the
/// caller gets the regular 400 body.
pub async fn missing_code_handler(
    State(state): State<AppState>,
    query: RawQuery,
) -> Result<Json<StatsResponse>, AppError> {
    stats_handler(State(state), Path(String::new()), query).await
}

#![allow(dead_code)]

use axum::extract::Request;
use axum::routing::IntoMakeService;
use axum::{Router, ServiceExt};
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;
use visit_stats::domain::entities::VisitRecord;
use visit_stats::infrastructure::persistence::MemoryVisitRepository;
use visit_stats::state::AppState;

pub const TABLE: &str = "daily_visits";

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Memory store seeded with `(code, date, count)` rows in [`TABLE`].
pub fn memory_store(rows: &[(&str, &str, u64)]) -> Arc<MemoryVisitRepository> {
    let repo = MemoryVisitRepository::new();
    for (code, day, count) in rows {
        repo.insert(TABLE, VisitRecord::new(*code, date(day), *count));
    }
    Arc::new(repo)
}

pub fn create_test_state(rows: &[(&str, &str, u64)]) -> AppState {
    AppState::new(memory_store(rows), Some(TABLE.to_string()))
}

pub fn create_unconfigured_state() -> AppState {
    AppState::new(memory_store(&[]), None)
}

/// The production router, trailing-slash normalisation included.
pub fn test_app(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    ServiceExt::<Request>::into_make_service(visit_stats::routes::app_router(state))
}

pub async fn insert_visit(pool: &PgPool, code: &str, day: &str, count: i64) {
    sqlx::query(r#"INSERT INTO daily_visits (code, "date", "count") VALUES ($1, $2, $3)"#)
        .bind(code)
        .bind(date(day))
        .bind(count)
        .execute(pool)
        .await
        .unwrap();
}

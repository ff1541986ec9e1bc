//! Daily visit statistics service.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use metrics::{counter, histogram};

use crate::domain::date_range::DateRange;
use crate::domain::entities::DailyStats;
use crate::domain::repositories::VisitRepository;
use crate::domain::series;
use crate::error::AppError;

/// Service answering "how many visits did `code` get per day".
///
/// Validates the request, resolves the date range, reads the counter store
/// once and returns a gap-filled series. Every validation failure is raised
/// before the store is touched.
pub struct StatsService {
    repository: Arc<dyn VisitRepository>,
    visits_table: Option<String>,
}

impl StatsService {
    /// Creates a new statistics service.
    ///
    /// `visits_table` is the counter table to read. When `None`, every
    /// request that passes validation fails with [`AppError::Config`].
    pub fn new(repository: Arc<dyn VisitRepository>, visits_table: Option<String>) -> Self {
        Self {
            repository,
            visits_table,
        }
    }

    /// Returns the configured counter table, if any.
    pub fn visits_table(&self) -> Option<&str> {
        self.visits_table.as_deref()
    }

    /// Checks that the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Retrieves daily statistics for `code`, resolving defaults against
    /// the current UTC date.
    ///
    /// # Errors
    ///
    /// See [`StatsService::get_daily_stats_at`].
    pub async fn get_daily_stats(
        &self,
        code: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<DailyStats, AppError> {
        self.get_daily_stats_at(code, from, to, Utc::now().date_naive())
            .await
    }

    /// Retrieves daily statistics for `code` as of `today`.
    ///
    /// Missing or malformed bounds default to the 30-day window ending on
    /// `today`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `code` is empty or `from > to`.
    /// Returns [`AppError::Config`] if no counter table is configured.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_daily_stats_at(
        &self,
        code: &str,
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
    ) -> Result<DailyStats, AppError> {
        if code.is_empty() {
            return Err(AppError::bad_request("missing path parameter {codigo}"));
        }

        let range = DateRange::resolve(from, to, today)?;

        let table = self
            .visits_table
            .as_deref()
            .ok_or_else(|| AppError::config("VISITS_TABLE is not configured"))?;

        tracing::debug!(
            code,
            from = %range.from(),
            to = %range.to(),
            table,
            "Querying visit counters"
        );

        let records = self
            .repository
            .query_range(table, code, range.from(), range.to())
            .await
            .inspect_err(|_| counter!("visit_stats_store_errors_total").increment(1))?;

        counter!("visit_stats_queries_total").increment(1);
        histogram!("visit_stats_raw_items").record(records.len() as f64);

        Ok(series::aggregate(code, range, &records))
    }
}

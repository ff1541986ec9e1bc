//! Repository trait for the per-day visit counter store.

use crate::domain::entities::VisitRecord;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read access to a partitioned time-series store of daily visit counts.
///
/// Records are partitioned by `code` and sorted by `date`. The table to read
/// is passed per call so the caller owns that piece of configuration.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryVisitRepository`] - In-memory store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_visit.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Returns every record in `table` with partition key `code` and a date
    /// in `[from, to]`, both ends inclusive.
    ///
    /// Implementations must return the complete result set, paging through
    /// the store if it limits page size.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors or corrupt rows.
    async fn query_range(
        &self,
        table: &str,
        code: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VisitRecord>, AppError>;

    /// Returns `true` if the store is reachable.
    async fn health_check(&self) -> bool;
}

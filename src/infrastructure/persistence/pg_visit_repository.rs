//! PostgreSQL implementation of the visit counter store.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::VisitRecord;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;
use crate::utils::table_name::quote_table_name;

/// Default number of rows fetched per page.
pub const DEFAULT_PAGE_SIZE: i64 = 1000;

#[derive(sqlx::FromRow)]
struct VisitRow {
    code: String,
    date: NaiveDate,
    count: i64,
}

impl TryFrom<VisitRow> for VisitRecord {
    type Error = AppError;

    fn try_from(row: VisitRow) -> Result<Self, Self::Error> {
        let count = u64::try_from(row.count).map_err(|_| {
            AppError::internal(
                "Internal error",
                format!(
                    "negative visit count {} for {} on {}",
                    row.count, row.code, row.date
                ),
            )
        })?;

        Ok(VisitRecord {
            code: row.code,
            date: row.date,
            count,
        })
    }
}

/// PostgreSQL repository for daily visit counters.
///
/// Expects a table shaped like the `daily_visits` migration: `code TEXT`,
/// `date DATE`, `count BIGINT`. A primary key on `(code, date)` is not
/// required: several rows for one day are returned as-is and summed by the
/// caller.
///
/// Range queries are read in pages of `page_size` rows, all inside one
/// read-only `REPEATABLE READ` transaction so every page sees the same
/// snapshot. Rows are ordered by `("date", ctid)`, which is total within a
/// snapshot, so `OFFSET` paging neither skips nor repeats rows.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
    page_size: i64,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, page_size: i64) -> Self {
        Self {
            pool,
            page_size: page_size.max(1),
        }
    }

    /// Adds `count` visits for `code` on `date`, creating the row if needed.
    ///
    /// Returns the counter value after the update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or an invalid
    /// table name.
    pub async fn record_visits(
        &self,
        table: &str,
        code: &str,
        date: NaiveDate,
        count: u64,
    ) -> Result<u64, AppError> {
        let table = quoted(table)?;
        let count = i64::try_from(count)
            .map_err(|e| AppError::internal("Internal error", e))?;

        let sql = format!(
            r#"
            INSERT INTO {table} AS v (code, "date", "count")
            VALUES ($1, $2, $3)
            ON CONFLICT (code, "date") DO UPDATE SET "count" = v."count" + EXCLUDED."count"
            RETURNING "count"
            "#
        );

        let updated = sqlx::query_scalar::<_, i64>(&sql)
            .bind(code)
            .bind(date)
            .bind(count)
            .fetch_one(self.pool.as_ref())
            .await?;

        u64::try_from(updated).map_err(|e| AppError::internal("Internal error", e))
    }
}

fn quoted(table: &str) -> Result<String, AppError> {
    quote_table_name(table).ok_or_else(|| {
        AppError::internal("Internal error", format!("invalid table name '{table}'"))
    })
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn query_range(
        &self,
        table: &str,
        code: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VisitRecord>, AppError> {
        let table = quoted(table)?;
        let sql = format!(
            r#"
            SELECT code, "date", "count"
            FROM {table}
            WHERE code = $1 AND "date" BETWEEN $2 AND $3
            ORDER BY "date", ctid
            LIMIT $4 OFFSET $5
            "#
        );

        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let mut records = Vec::new();
        let mut offset: i64 = 0;

        loop {
            let rows = sqlx::query_as::<_, VisitRow>(&sql)
                .bind(code)
                .bind(from)
                .bind(to)
                .bind(self.page_size)
                .bind(offset)
                .fetch_all(&mut *tx)
                .await?;

            let fetched = rows.len();
            offset += fetched as i64;

            for row in rows {
                records.push(VisitRecord::try_from(row)?);
            }

            if (fetched as i64) < self.page_size {
                break;
            }

            tracing::debug!(code, offset, "Fetching next page of visit counters");
        }

        tx.commit().await?;

        Ok(records)
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Store health check failed: {}", e);
                false
            }
        }
    }
}

//! In-memory visit counter store.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::VisitRecord;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// A [`VisitRepository`] backed by per-table vectors.
///
/// Records are kept exactly as inserted, duplicates included, which makes
/// it useful for exercising aggregation against an unclean store.
#[derive(Default)]
pub struct MemoryVisitRepository {
    tables: RwLock<HashMap<String, Vec<VisitRecord>>>,
}

impl MemoryVisitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to `table`.
    pub fn insert(&self, table: &str, record: VisitRecord) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.entry(table.to_string()).or_default().push(record);
    }
}

#[async_trait]
impl VisitRepository for MemoryVisitRepository {
    async fn query_range(
        &self,
        table: &str,
        code: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VisitRecord>, AppError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| AppError::internal("Internal error", e))?;

        let mut records: Vec<VisitRecord> = tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|r| r.code == code && r.date >= from && r.date <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_query_range_filters_code_and_dates() {
        let repo = MemoryVisitRepository::new();
        repo.insert("t", VisitRecord::new("a", date("2024-01-01"), 1));
        repo.insert("t", VisitRecord::new("a", date("2024-01-05"), 2));
        repo.insert("t", VisitRecord::new("a", date("2024-01-06"), 4));
        repo.insert("t", VisitRecord::new("b", date("2024-01-02"), 8));

        let records = repo
            .query_range("t", "a", date("2024-01-01"), date("2024-01-05"))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.code == "a"));
    }

    #[tokio::test]
    async fn test_query_range_is_scoped_to_table() {
        let repo = MemoryVisitRepository::new();
        repo.insert("t1", VisitRecord::new("a", date("2024-01-01"), 1));

        let records = repo
            .query_range("t2", "a", date("2024-01-01"), date("2024-01-01"))
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_duplicates_are_preserved() {
        let repo = MemoryVisitRepository::new();
        repo.insert("t", VisitRecord::new("a", date("2024-01-01"), 2));
        repo.insert("t", VisitRecord::new("a", date("2024-01-01"), 3));

        let records = repo
            .query_range("t", "a", date("2024-01-01"), date("2024-01-01"))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
    }
}

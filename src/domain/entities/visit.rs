//! Visit counters and the aggregated series built from them.

use chrono::NaiveDate;

/// A per-day visit counter as stored in the counter table.
///
/// One record per `(code, date)` is expected, but aggregation tolerates
/// duplicates by summing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub code: String,
    pub date: NaiveDate,
    pub count: u64,
}

impl VisitRecord {
    pub fn new(code: impl Into<String>, date: NaiveDate, count: u64) -> Self {
        Self {
            code: code.into(),
            date,
            count,
        }
    }
}

/// One day of a gap-filled series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub count: u64,
}

/// Daily statistics for a single code over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyStats {
    pub code: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total: u64,
    pub series: Vec<SeriesPoint>,
    /// Number of records the store returned, before aggregation.
    pub raw_items_count: usize,
}

//! Gap-filled daily series aggregation.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::date_range::DateRange;
use super::entities::{DailyStats, SeriesPoint, VisitRecord};

/// Builds one [`SeriesPoint`] per day of `range`, ascending.
///
/// Records sharing a date are summed. Days with no record get a count of 0.
/// Records outside the range are ignored.
pub fn build_series(range: DateRange, records: &[VisitRecord]) -> Vec<SeriesPoint> {
    let mut by_date: HashMap<NaiveDate, u64> = HashMap::with_capacity(records.len());
    for record in records {
        *by_date.entry(record.date).or_default() += record.count;
    }

    let mut series = Vec::with_capacity(range.len_days());
    series.extend(range.days().map(|date| SeriesPoint {
        date,
        count: by_date.get(&date).copied().unwrap_or(0),
    }));
    series
}

/// Aggregates raw store records into [`DailyStats`] for `code`.
pub fn aggregate(code: &str, range: DateRange, records: &[VisitRecord]) -> DailyStats {
    let series = build_series(range, records);
    let total = series.iter().map(|point| point.count).sum();

    DailyStats {
        code: code.to_string(),
        from: range.from(),
        to: range.to(),
        total,
        series,
        raw_items_count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::new(date(from), date(to)).unwrap()
    }

    #[test]
    fn test_gaps_are_zero_filled() {
        let records = vec![
            VisitRecord::new("X", date("2024-01-01"), 3),
            VisitRecord::new("X", date("2024-01-03"), 5),
        ];

        let stats = aggregate("X", range("2024-01-01", "2024-01-03"), &records);

        assert_eq!(
            stats.series,
            vec![
                SeriesPoint { date: date("2024-01-01"), count: 3 },
                SeriesPoint { date: date("2024-01-02"), count: 0 },
                SeriesPoint { date: date("2024-01-03"), count: 5 },
            ]
        );
        assert_eq!(stats.total, 8);
        assert_eq!(stats.raw_items_count, 2);
    }

    #[test]
    fn test_duplicate_dates_are_summed() {
        let records = vec![
            VisitRecord::new("X", date("2024-01-01"), 2),
            VisitRecord::new("X", date("2024-01-01"), 3),
        ];

        let stats = aggregate("X", range("2024-01-01", "2024-01-01"), &records);

        assert_eq!(stats.series.len(), 1);
        assert_eq!(stats.series[0].count, 5);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.raw_items_count, 2);
    }

    #[test]
    fn test_empty_store_yields_all_zero_series() {
        let stats = aggregate("X", range("2024-02-01", "2024-02-29"), &[]);

        assert_eq!(stats.series.len(), 29);
        assert!(stats.series.iter().all(|p| p.count == 0));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.raw_items_count, 0);
    }

    #[test]
    fn test_records_outside_range_do_not_count() {
        let records = vec![
            VisitRecord::new("X", date("2023-12-31"), 7),
            VisitRecord::new("X", date("2024-01-01"), 1),
        ];

        let stats = aggregate("X", range("2024-01-01", "2024-01-02"), &records);

        assert_eq!(stats.total, 1);
        assert_eq!(stats.raw_items_count, 2);
    }

    #[test]
    fn test_total_matches_series_sum() {
        let records: Vec<_> = (1..=9)
            .map(|d| VisitRecord::new("X", date(&format!("2024-05-0{d}")), d * 10))
            .collect();

        let stats = aggregate("X", range("2024-04-28", "2024-05-12"), &records);

        let sum: u64 = stats.series.iter().map(|p| p.count).sum();
        assert_eq!(stats.total, sum);
        assert_eq!(stats.total, 450);
        assert_eq!(stats.series.len(), 15);
    }

    #[test]
    fn test_series_is_ascending_without_duplicates() {
        let stats = aggregate("X", range("2024-12-25", "2025-01-05"), &[]);

        assert!(stats.series.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(stats.series.first().unwrap().date, date("2024-12-25"));
        assert_eq!(stats.series.last().unwrap().date, date("2025-01-05"));
    }

    #[test]
    fn test_series_is_sized_to_range() {
        for (from, to) in [
            ("2024-01-01", "2024-01-01"),
            ("2023-02-01", "2023-03-01"),
            ("2023-06-01", "2024-06-01"),
        ] {
            let range = range(from, to);
            let series = build_series(range, &[]);

            assert_eq!(series.len(), range.len_days(), "range {from}..={to}");
        }
    }
}

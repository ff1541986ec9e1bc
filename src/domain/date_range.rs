//! Inclusive calendar date ranges and their resolution from request input.

use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;

/// Length of the trailing window used when a bound is missing or malformed.
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Wire format for dates, e.g. `2024-01-31`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
///
/// Returns `None` when the shape is wrong or the date does not exist
/// (`2024-13-40`, `2023-02-29`).
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    if !DATE_REGEX.is_match(input) {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// An inclusive range of calendar days, `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, AppError> {
        if from > to {
            return Err(AppError::bad_request("'from' must be <= 'to' (YYYY-MM-DD)"));
        }
        Ok(Self { from, to })
    }

    /// Resolves optional request bounds against `today`.
    ///
    /// Each bound that is absent or malformed falls back independently:
    /// `to` to `today`, `from` to `today` minus 29 days. The resulting
    /// range must still satisfy `from <= to`.
    pub fn resolve(
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, AppError> {
        let default_from = today
            .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS - 1))
            .unwrap_or(NaiveDate::MIN);

        let from = from.and_then(parse_date).unwrap_or(default_from);
        let to = to.and_then(parse_date).unwrap_or(today);

        Self::new(from, to)
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of calendar days in the range, both ends included.
    pub fn len_days(&self) -> usize {
        (self.to - self.from).num_days() as usize + 1
    }

    /// Every day in the range, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("2024-01-31"), Some(date(2024, 1, 31)));
        assert_eq!(parse_date("2024-02-29"), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_date_rejects_bad_shape() {
        assert_eq!(parse_date("abc"), None);
        assert_eq!(parse_date("2024-1-01"), None);
        assert_eq!(parse_date("2024-01-01T00:00:00Z"), None);
        assert_eq!(parse_date(" 2024-01-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert_eq!(parse_date("2024-13-40"), None);
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("2024-04-31"), None);
    }

    #[test]
    fn test_resolve_explicit_bounds() {
        let range = DateRange::resolve(Some("2024-01-01"), Some("2024-01-03"), date(2030, 1, 1))
            .unwrap();

        assert_eq!(range.from(), date(2024, 1, 1));
        assert_eq!(range.to(), date(2024, 1, 3));
        assert_eq!(range.len_days(), 3);
    }

    #[test]
    fn test_resolve_defaults_to_trailing_window() {
        let today = date(2024, 3, 10);
        let range = DateRange::resolve(None, None, today).unwrap();

        assert_eq!(range.to(), today);
        assert_eq!(range.from(), date(2024, 2, 10));
        assert_eq!(range.len_days(), 30);
    }

    #[test]
    fn test_resolve_malformed_bounds_use_defaults() {
        let today = date(2024, 3, 10);
        let range = DateRange::resolve(Some("2024-13-40"), Some("abc"), today).unwrap();

        assert_eq!(range, DateRange::resolve(None, None, today).unwrap());
    }

    #[test]
    fn test_resolve_only_from_given() {
        let today = date(2024, 3, 10);
        let range = DateRange::resolve(Some("2024-03-01"), None, today).unwrap();

        assert_eq!(range.from(), date(2024, 3, 1));
        assert_eq!(range.to(), today);
    }

    #[test]
    fn test_resolve_from_after_to_is_bad_request() {
        let result = DateRange::resolve(Some("2024-01-05"), Some("2024-01-01"), date(2024, 2, 1));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_resolve_future_from_against_default_to_is_bad_request() {
        let result = DateRange::resolve(Some("2099-01-01"), None, date(2024, 2, 1));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(range.len_days(), 1);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date(2024, 1, 1)]);
    }

    #[test]
    fn test_days_cross_month_and_year() {
        let range = DateRange::new(date(2023, 12, 30), date(2024, 1, 2)).unwrap();
        let days: Vec<_> = range.days().collect();

        assert_eq!(
            days,
            vec![
                date(2023, 12, 30),
                date(2023, 12, 31),
                date(2024, 1, 1),
                date(2024, 1, 2),
            ]
        );
    }

    #[test]
    fn test_days_over_leap_day_and_dst_weekend() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 31)).unwrap();
        let days: Vec<_> = range.days().collect();

        assert_eq!(days.len(), range.len_days());
        assert!(days.contains(&date(2024, 2, 29)));
        assert_eq!(days.last(), Some(&date(2024, 3, 31)));
        assert!(days.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
    }
}

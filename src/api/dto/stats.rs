//! DTOs for daily visit statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DailyStats, SeriesPoint};

/// Query string of `GET /stats/{codigo}`.
///
/// Bounds stay raw strings: malformed values are not a client error, they
/// fall back to the default window.
#[derive(Debug, Default, Deserialize)]
pub struct StatsQueryParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl StatsQueryParams {
    /// Parses a raw query string leniently.
    ///
    /// Repeated keys keep the last value, unknown keys are ignored and
    /// invalid percent-encoding is decoded lossily, so no query string is
    /// ever rejected here.
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut params = Self::default();

        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "from" => params.from = Some(value.into_owned()),
                "to" => params.to = Some(value.into_owned()),
                _ => {}
            }
        }

        params
    }
}

/// One day of the series.
#[derive(Debug, Serialize)]
pub struct SeriesPointDto {
    pub date: NaiveDate,
    pub count: u64,
}

impl From<SeriesPoint> for SeriesPointDto {
    fn from(point: SeriesPoint) -> Self {
        Self {
            date: point.date,
            count: point.count,
        }
    }
}

/// Gap-filled daily statistics for a code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub code: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total: u64,
    pub series: Vec<SeriesPointDto>,
    pub raw_items_count: usize,
}

impl From<DailyStats> for StatsResponse {
    fn from(stats: DailyStats) -> Self {
        Self {
            code: stats.code,
            from: stats.from,
            to: stats.to,
            total: stats.total,
            series: stats.series.into_iter().map(Into::into).collect(),
            raw_items_count: stats.raw_items_count,
        }
    }
}

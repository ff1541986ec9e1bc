//! Core domain entities.
//!
//! - [`VisitRecord`] - A stored per-day counter for a code
//! - [`SeriesPoint`] - One day of a gap-filled series
//! - [`DailyStats`] - The aggregated result for a code and date range

pub mod visit;

pub use visit::{DailyStats, SeriesPoint, VisitRecord};

//! HTTP request handlers for API endpoints.

pub mod health;
pub mod stats;

pub use health::health_handler;
pub use stats::{missing_code_handler, stats_handler};

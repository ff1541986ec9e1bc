//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::stats_service::StatsService`] - Daily visit statistics

pub mod services;

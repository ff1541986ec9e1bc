//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::StatsService;
use crate::domain::repositories::VisitRepository;

#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Builds the state around a visit store and the configured table name.
    pub fn new(repository: Arc<dyn VisitRepository>, visits_table: Option<String>) -> Self {
        Self {
            stats_service: Arc::new(StatsService::new(repository, visits_table)),
        }
    }
}

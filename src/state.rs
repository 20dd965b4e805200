use std::sync::Arc;
use std::time::Instant;

use crate::infrastructure::decision::DecisionService;

/// Shared application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    /// Decision service evaluating admission rules.
    pub decisions: Arc<dyn DecisionService>,
    /// Process start time, reported as uptime by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(decisions: Arc<dyn DecisionService>) -> Self {
        Self {
            decisions,
            started_at: Instant::now(),
        }
    }
}

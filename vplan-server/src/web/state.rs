//! Application state for the web layer.

use std::sync::Arc;

use crate::plan::PlanService;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Plan download, extraction and cache
    pub plan: Arc<PlanService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(plan: PlanService) -> Self {
        Self {
            plan: Arc::new(plan),
        }
    }
}

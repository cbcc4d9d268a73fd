//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::VisitDataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dataset loaded at startup; never mutated afterwards
    pub dataset: Arc<VisitDataset>,
    /// Departments shown in the box plots, in display order
    pub departments: Arc<[String]>,
}

impl AppState {
    /// Create a new application state over a loaded dataset.
    pub fn new(dataset: VisitDataset, departments: Vec<String>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            departments: departments.into(),
        }
    }
}

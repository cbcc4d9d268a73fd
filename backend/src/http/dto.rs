//! Data Transfer Objects for the HTTP API.
//!
//! Response types are re-exported from [`crate::api`] since they already
//! derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    BoxPlotSeries, BoxPlotStats, DashboardData, DashboardOptions, DatasetSummary, HeatmapMatrix,
};
use crate::services::FilterPredicate;

/// Request body for dashboard computations.
///
/// Dates use `YYYY-MM-DD`; both ends are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub clinic: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Empty selects nothing.
    #[serde(default)]
    pub admit_sources: Vec<String>,
}

impl From<DashboardQuery> for FilterPredicate {
    fn from(query: DashboardQuery) -> Self {
        FilterPredicate::new(
            query.clinic,
            query.start_date,
            query.end_date,
            query.admit_sources,
        )
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Loaded dataset
    pub dataset: DatasetSummary,
}

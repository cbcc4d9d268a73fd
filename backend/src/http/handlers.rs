//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Aggregation runs on the blocking pool so large filter selections
//! never stall the async workers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::dto::{
    BoxPlotSeries, DashboardData, DashboardOptions, DashboardQuery, HealthResponse, HeatmapMatrix,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{MetricColumn, VisitDataset};
use crate::services::{self, FilterPredicate};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run `f` against the dataset on the blocking thread pool.
async fn with_dataset<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&VisitDataset, &[String]) -> T + Send + 'static,
{
    let dataset = state.dataset.clone();
    let departments = state.departments.clone();
    tokio::task::spawn_blocking(move || f(&*dataset, &*departments))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: state.dataset.summary(),
    }))
}

// =============================================================================
// Widget Options
// =============================================================================

/// GET /v1/options
///
/// Clinic names, admit sources, date bounds, departments and the default
/// selection used to populate the filter widgets.
pub async fn get_options(State(state): State<AppState>) -> HandlerResult<DashboardOptions> {
    let options = with_dataset(&state, |dataset, departments| {
        services::dashboard_options(dataset, departments)
    })
    .await?;
    Ok(Json(options))
}

// =============================================================================
// Dashboard Endpoints
// =============================================================================

/// POST /v1/dashboard
///
/// Heatmap (both orientations) and both box-plot sets for one selection.
pub async fn post_dashboard(
    State(state): State<AppState>,
    payload: Result<Json<DashboardQuery>, JsonRejection>,
) -> HandlerResult<DashboardData> {
    let Json(query) = payload?;
    let predicate = FilterPredicate::from(query);

    let data = with_dataset(&state, move |dataset, departments| {
        services::compute_dashboard(dataset, &predicate, departments)
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/dashboard/default
///
/// Dashboard for the initial widget state.
pub async fn get_default_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardData> {
    let data = with_dataset(&state, |dataset, departments| {
        services::default_predicate(dataset)
            .map(|predicate| services::compute_dashboard(dataset, &predicate, departments))
    })
    .await?
    .ok_or_else(|| AppError::NotFound("Dataset is empty".to_string()))?;
    Ok(Json(data))
}

/// POST /v1/heatmap
pub async fn post_heatmap(
    State(state): State<AppState>,
    payload: Result<Json<DashboardQuery>, JsonRejection>,
) -> HandlerResult<HeatmapMatrix> {
    let Json(query) = payload?;
    let predicate = FilterPredicate::from(query);

    let matrix = with_dataset(&state, move |dataset, _| {
        let filtered = services::filter_visits(dataset.records(), &predicate);
        services::aggregate_heatmap(filtered)
    })
    .await?;
    Ok(Json(matrix))
}

/// POST /v1/boxplots/{metric}
///
/// `metric` is `wait-time` or `care-score`.
pub async fn post_boxplots(
    State(state): State<AppState>,
    Path(metric): Path<String>,
    payload: Result<Json<DashboardQuery>, JsonRejection>,
) -> HandlerResult<Vec<BoxPlotSeries>> {
    let column: MetricColumn = metric.parse().map_err(AppError::BadRequest)?;
    let Json(query) = payload?;
    let predicate = FilterPredicate::from(query);

    let series = with_dataset(&state, move |dataset, departments| {
        let filtered = services::filter_visits(dataset.records(), &predicate);
        services::aggregate_boxplot(filtered, departments, column)
    })
    .await?;
    Ok(Json(series))
}

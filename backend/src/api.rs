//! Public API surface for the clinic analytics backend.
//!
//! This file consolidates the result types handed to the presentation layer.
//! All types derive Serialize/Deserialize for JSON serialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::models::{DatasetSummary, MetricColumn, VisitDataset, VisitRecord};
pub use crate::services::filtering::FilterPredicate;

/// Patient volume by weekday (rows) and hour of day (columns).
///
/// `values[r][c]` is the summed record count for `rows[r]` at `columns[c]`.
/// Missing combinations hold 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<u64>>,
}

impl HeatmapMatrix {
    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Cell lookup by labels.
    pub fn get(&self, row: &str, column: &str) -> Option<u64> {
        let r = self.rows.iter().position(|label| label == row)?;
        let c = self.columns.iter().position(|label| label == column)?;
        Some(self.values[r][c])
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.values.iter().flatten().sum()
    }

    /// Swap rows and columns (hours down the side, weekdays across the top).
    pub fn transpose(&self) -> HeatmapMatrix {
        let values = (0..self.columns.len())
            .map(|c| self.values.iter().map(|row| row[c]).collect())
            .collect();
        HeatmapMatrix {
            rows: self.columns.clone(),
            columns: self.rows.clone(),
            values,
        }
    }
}

/// Five-number summary plus mean of one box-plot series.
///
/// All fields except `count` are `None` for an empty series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotStats {
    pub count: usize,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Distribution of one metric for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSeries {
    pub department: String,
    /// Observations in input order.
    pub values: Vec<f64>,
    pub stats: BoxPlotStats,
}

/// Everything the dashboard draws for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub heatmap: HeatmapMatrix,
    /// `heatmap` transposed, for narrow screens.
    pub heatmap_vertical: HeatmapMatrix,
    pub wait_time: Vec<BoxPlotSeries>,
    pub care_score: Vec<BoxPlotSeries>,
    pub filtered_count: usize,
}

/// Values that populate the selection widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub clinics: Vec<String>,
    pub admit_sources: Vec<String>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub departments: Vec<String>,
    /// Initial widget state; `None` for an empty dataset.
    pub default_selection: Option<FilterPredicate>,
}

impl DashboardOptions {
    pub fn default_predicate(&self) -> Option<&FilterPredicate> {
        self.default_selection.as_ref()
    }
}

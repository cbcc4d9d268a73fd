//! Normalized clinical visit records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::time::CalendarFields;

/// Admit source assigned to records whose source is blank in the input.
pub const NOT_IDENTIFIED: &str = "Not Identified";

/// Departments shown in the box plots when no list is configured.
pub const DEFAULT_DEPARTMENTS: [&str; 5] = [
    "General Surgery",
    "Orthopedics",
    "Neurosurgery",
    "Plastic Surgery",
    "Urology",
];

/// One patient check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub clinic_name: String,
    /// Never empty; blank inputs become [`NOT_IDENTIFIED`].
    pub admit_source: String,
    pub department: String,
    pub check_in: NaiveDateTime,
    /// Wait time in minutes, `None` when the input cell was blank.
    pub wait_time_min: Option<f64>,
    /// `None` when the input cell was blank.
    pub care_score: Option<f64>,
    pub record_count: u64,
    pub calendar: CalendarFields,
}

impl VisitRecord {
    /// Build a record, deriving its calendar fields from `check_in`.
    pub fn new(
        clinic_name: impl Into<String>,
        admit_source: impl Into<String>,
        department: impl Into<String>,
        check_in: NaiveDateTime,
        wait_time_min: Option<f64>,
        care_score: Option<f64>,
        record_count: u64,
    ) -> Self {
        Self {
            clinic_name: clinic_name.into(),
            admit_source: admit_source.into(),
            department: department.into(),
            calendar: CalendarFields::from_timestamp(&check_in),
            check_in,
            wait_time_min,
            care_score,
            record_count,
        }
    }

    pub fn check_in_date(&self) -> NaiveDate {
        self.check_in.date()
    }

    pub fn metric(&self, column: MetricColumn) -> Option<f64> {
        match column {
            MetricColumn::WaitTime => self.wait_time_min,
            MetricColumn::CareScore => self.care_score,
        }
    }
}

/// Numeric column summarized by the box plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricColumn {
    WaitTime,
    CareScore,
}

impl MetricColumn {
    /// Header of the source column.
    pub fn column_name(&self) -> &'static str {
        match self {
            MetricColumn::WaitTime => "Wait Time Min",
            MetricColumn::CareScore => "Care Score",
        }
    }

    /// URL slug used by the HTTP API.
    pub fn slug(&self) -> &'static str {
        match self {
            MetricColumn::WaitTime => "wait-time",
            MetricColumn::CareScore => "care-score",
        }
    }
}

impl fmt::Display for MetricColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for MetricColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wait-time" | "Wait Time Min" => Ok(MetricColumn::WaitTime),
            "care-score" | "Care Score" => Ok(MetricColumn::CareScore),
            other => Err(format!(
                "Unknown metric '{}'. Must be 'wait-time' or 'care-score'",
                other
            )),
        }
    }
}

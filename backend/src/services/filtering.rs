use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::VisitRecord;

/// Current widget selection.
///
/// Rebuilt for every query; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub clinic: String,
    /// Inclusive.
    pub start_date: NaiveDate,
    /// Inclusive: check-ins at any time on this day match.
    pub end_date: NaiveDate,
    pub admit_sources: BTreeSet<String>,
}

impl FilterPredicate {
    pub fn new<I, S>(
        clinic: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        admit_sources: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clinic: clinic.into(),
            start_date,
            end_date,
            admit_sources: admit_sources.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, record: &VisitRecord) -> bool {
        let day = record.check_in_date();
        record.clinic_name == self.clinic
            && self.start_date <= day
            && day <= self.end_date
            && self.admit_sources.contains(&record.admit_source)
    }
}

/// Records matching `predicate`, in input order.
///
/// An empty admit-source set or an inverted date range matches nothing.
pub fn filter_visits<'a>(
    records: &'a [VisitRecord],
    predicate: &FilterPredicate,
) -> Vec<&'a VisitRecord> {
    records.iter().filter(|r| predicate.matches(r)).collect()
}

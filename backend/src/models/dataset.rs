use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::visit::VisitRecord;

/// The normalized visit dataset.
///
/// Built once at startup and never mutated afterwards; callers share it by
/// reference (or behind an `Arc`) and run filters and aggregations over it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitDataset {
    records: Vec<VisitRecord>,
}

/// Headline numbers about a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub clinics: usize,
    pub admit_sources: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl VisitDataset {
    pub fn new(records: Vec<VisitRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct clinic names, sorted.
    pub fn clinic_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.clinic_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct admit sources, sorted.
    pub fn admit_sources(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.admit_source.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Earliest and latest check-in date, or `None` for an empty dataset.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(VisitRecord::check_in_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    pub fn summary(&self) -> DatasetSummary {
        let range = self.date_range();
        DatasetSummary {
            records: self.len(),
            clinics: self.clinic_names().len(),
            admit_sources: self.admit_sources().len(),
            first_date: range.map(|(first, _)| first),
            last_date: range.map(|(_, last)| last),
        }
    }
}

impl From<Vec<VisitRecord>> for VisitDataset {
    fn from(records: Vec<VisitRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time::parse_check_in;

    fn record(clinic: &str, source: &str, when: &str) -> VisitRecord {
        VisitRecord::new(
            clinic,
            source,
            "Urology",
            parse_check_in(when).unwrap(),
            Some(10.0),
            Some(7.0),
            1,
        )
    }

    #[test]
    fn test_widget_options_are_sorted_and_distinct() {
        let dataset = VisitDataset::new(vec![
            record("Saint Mary", "Walk-in", "2024-02-01 10:00:00 AM"),
            record("Acme Clinic", "Referral", "2024-01-15 03:00:00 PM"),
            record("Saint Mary", "Referral", "2024-03-09 08:00:00 AM"),
        ]);

        assert_eq!(dataset.clinic_names(), vec!["Acme Clinic", "Saint Mary"]);
        assert_eq!(dataset.admit_sources(), vec!["Referral", "Walk-in"]);
        assert_eq!(
            dataset.date_range(),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
            ))
        );
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = VisitDataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.clinic_names().is_empty());
        assert_eq!(dataset.date_range(), None);

        let summary = dataset.summary();
        assert_eq!(summary.records, 0);
        assert_eq!(summary.first_date, None);
    }

    #[test]
    fn test_summary() {
        let dataset = VisitDataset::from(vec![
            record("A", "Walk-in", "2024-01-01 10:00:00 AM"),
            record("B", "Walk-in", "2024-01-02 10:00:00 AM"),
        ]);
        let summary = dataset.summary();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.clinics, 2);
        assert_eq!(summary.admit_sources, 1);
        assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2024, 1, 2));
    }
}

//! One dashboard interaction: filter once, feed both aggregators.

use tracing::debug;

use super::boxplot::aggregate_boxplot;
use super::filtering::{filter_visits, FilterPredicate};
use super::heatmap::aggregate_heatmap;
use crate::api::{DashboardData, DashboardOptions};
use crate::models::{MetricColumn, VisitDataset};

/// Position of the preselected clinic in the sorted clinic list.
const DEFAULT_CLINIC_INDEX: usize = 2;

/// Recompute every chart for `predicate`. Nothing is cached between calls.
pub fn compute_dashboard<S: AsRef<str>>(
    dataset: &VisitDataset,
    predicate: &FilterPredicate,
    departments: &[S],
) -> DashboardData {
    let filtered = filter_visits(dataset.records(), predicate);

    let heatmap = aggregate_heatmap(filtered.iter().copied());
    let wait_time = aggregate_boxplot(filtered.iter().copied(), departments, MetricColumn::WaitTime);
    let care_score =
        aggregate_boxplot(filtered.iter().copied(), departments, MetricColumn::CareScore);

    debug!(
        clinic = %predicate.clinic,
        start = %predicate.start_date,
        end = %predicate.end_date,
        sources = predicate.admit_sources.len(),
        filtered = filtered.len(),
        heatmap_rows = heatmap.rows.len(),
        heatmap_columns = heatmap.columns.len(),
        "Computed dashboard"
    );

    DashboardData {
        heatmap_vertical: heatmap.transpose(),
        heatmap,
        wait_time,
        care_score,
        filtered_count: filtered.len(),
    }
}

/// Initial selection: the third clinic (or the first if there are fewer than
/// three), the full date range and every admit source.
pub fn default_predicate(dataset: &VisitDataset) -> Option<FilterPredicate> {
    let clinics = dataset.clinic_names();
    let clinic = clinics
        .get(DEFAULT_CLINIC_INDEX)
        .or_else(|| clinics.first())?
        .clone();
    let (start_date, end_date) = dataset.date_range()?;
    Some(FilterPredicate::new(
        clinic,
        start_date,
        end_date,
        dataset.admit_sources(),
    ))
}

/// Widget options for the current dataset.
pub fn dashboard_options<S: AsRef<str>>(
    dataset: &VisitDataset,
    departments: &[S],
) -> DashboardOptions {
    let range = dataset.date_range();
    DashboardOptions {
        clinics: dataset.clinic_names(),
        admit_sources: dataset.admit_sources(),
        min_date: range.map(|(first, _)| first),
        max_date: range.map(|(_, last)| last),
        departments: departments.iter().map(|d| d.as_ref().to_string()).collect(),
        default_selection: default_predicate(dataset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time::parse_check_in;
    use crate::models::{VisitRecord, DEFAULT_DEPARTMENTS};
    use chrono::NaiveDate;

    fn visit(clinic: &str, source: &str, department: &str, when: &str, wait: f64) -> VisitRecord {
        VisitRecord::new(
            clinic,
            source,
            department,
            parse_check_in(when).unwrap(),
            Some(wait),
            Some(wait / 10.0),
            1,
        )
    }

    fn dataset() -> VisitDataset {
        VisitDataset::new(vec![
            visit("Acme", "Walk-in", "Urology", "2024-01-01 09:00:00 AM", 10.0),
            visit("Acme", "Referral", "Orthopedics", "2024-01-02 02:00:00 PM", 20.0),
            visit("Acme", "Walk-in", "Cardiology", "2024-01-02 02:30:00 PM", 30.0),
            visit("Beacon", "Walk-in", "Urology", "2024-01-03 10:00:00 AM", 40.0),
            visit("Cedar", "Not Identified", "Urology", "2024-01-04 11:00:00 AM", 50.0),
        ])
    }

    #[test]
    fn test_compute_dashboard() {
        let dataset = dataset();
        let predicate = FilterPredicate::new(
            "Acme",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            ["Walk-in", "Referral"],
        );
        let data = compute_dashboard(&dataset, &predicate, &DEFAULT_DEPARTMENTS);

        assert_eq!(data.filtered_count, 3);
        assert_eq!(data.heatmap.rows, vec!["Monday", "Tuesday"]);
        assert_eq!(data.heatmap.columns, vec!["09 AM", "02 PM"]);
        assert_eq!(data.heatmap.get("Tuesday", "02 PM"), Some(2));
        assert_eq!(data.heatmap_vertical, data.heatmap.transpose());

        assert_eq!(data.wait_time.len(), DEFAULT_DEPARTMENTS.len());
        let urology = data
            .wait_time
            .iter()
            .find(|s| s.department == "Urology")
            .unwrap();
        assert_eq!(urology.values, vec![10.0]);
        let orthopedics = data
            .care_score
            .iter()
            .find(|s| s.department == "Orthopedics")
            .unwrap();
        assert_eq!(orthopedics.values, vec![2.0]);
        // Cardiology is not a dashboard department
        assert!(data.wait_time.iter().all(|s| s.department != "Cardiology"));
    }

    #[test]
    fn test_empty_selection_gives_empty_charts() {
        let dataset = dataset();
        let predicate = FilterPredicate::new(
            "Acme",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            Vec::<String>::new(),
        );
        let data = compute_dashboard(&dataset, &predicate, &["Urology"]);
        assert_eq!(data.filtered_count, 0);
        assert!(data.heatmap.is_empty());
        assert_eq!(data.wait_time.len(), 1);
        assert!(data.wait_time[0].values.is_empty());
    }

    #[test]
    fn test_default_predicate_picks_third_clinic() {
        let predicate = default_predicate(&dataset()).unwrap();
        assert_eq!(predicate.clinic, "Cedar");
        assert_eq!(predicate.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(predicate.end_date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
        assert_eq!(predicate.admit_sources.len(), 3);
    }

    #[test]
    fn test_default_predicate_falls_back_to_first_clinic() {
        let dataset = VisitDataset::new(vec![visit(
            "Solo",
            "Walk-in",
            "Urology",
            "2024-01-01 09:00:00 AM",
            1.0,
        )]);
        assert_eq!(default_predicate(&dataset).unwrap().clinic, "Solo");
        assert!(default_predicate(&VisitDataset::default()).is_none());
    }

    #[test]
    fn test_dashboard_options() {
        let options = dashboard_options(&dataset(), &DEFAULT_DEPARTMENTS);
        assert_eq!(options.clinics, vec!["Acme", "Beacon", "Cedar"]);
        assert_eq!(options.admit_sources, vec!["Not Identified", "Referral", "Walk-in"]);
        assert_eq!(options.min_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(options.max_date, NaiveDate::from_ymd_opt(2024, 1, 4));
        assert_eq!(options.departments.len(), 5);
        assert_eq!(options.default_predicate().unwrap().clinic, "Cedar");
    }
}

use std::collections::HashMap;

use crate::api::{BoxPlotSeries, BoxPlotStats};
use crate::models::{MetricColumn, VisitRecord};

/// Linear-interpolated quantile of an ascending slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Compute the box-plot summary of a series.
pub fn compute_stats(values: &[f64]) -> BoxPlotStats {
    if values.is_empty() {
        return BoxPlotStats::default();
    }

    let count = values.len();
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    BoxPlotStats {
        count,
        min: sorted.first().copied(),
        q1: Some(quantile(&sorted, 0.25)),
        median: Some(quantile(&sorted, 0.5)),
        q3: Some(quantile(&sorted, 0.75)),
        max: sorted.last().copied(),
        mean: Some(values.iter().sum::<f64>() / count as f64),
    }
}

impl BoxPlotSeries {
    pub fn new(department: impl Into<String>, values: Vec<f64>) -> Self {
        let stats = compute_stats(&values);
        Self {
            department: department.into(),
            values,
            stats,
        }
    }
}

/// Collect `column` values per department.
///
/// One series per entry of `departments`, in the caller's order. A department
/// with no records gets an empty series. Values keep input order; blank cells
/// are skipped. Records from departments outside the list are ignored.
pub fn aggregate_boxplot<'a, I, S>(
    records: I,
    departments: &[S],
    column: MetricColumn,
) -> Vec<BoxPlotSeries>
where
    I: IntoIterator<Item = &'a VisitRecord>,
    S: AsRef<str>,
{
    let mut slots: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, department) in departments.iter().enumerate() {
        slots.entry(department.as_ref()).or_default().push(i);
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); departments.len()];
    for record in records {
        let Some(indices) = slots.get(record.department.as_str()) else {
            continue;
        };
        if let Some(value) = record.metric(column) {
            for &i in indices {
                values[i].push(value);
            }
        }
    }

    departments
        .iter()
        .zip(values)
        .map(|(department, values)| BoxPlotSeries::new(department.as_ref(), values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time::parse_check_in;

    fn visit(department: &str, wait: Option<f64>, score: Option<f64>) -> VisitRecord {
        VisitRecord::new(
            "Acme",
            "Walk-in",
            department,
            parse_check_in("2024-01-01 09:00:00 AM").unwrap(),
            wait,
            score,
            1,
        )
    }

    #[test]
    fn test_missing_department_yields_empty_series() {
        let records = vec![
            visit("A", Some(4.2), None),
            visit("A", Some(7.0), None),
            visit("A", Some(1.1), None),
        ];
        let series = aggregate_boxplot(&records, &["A", "B"], MetricColumn::WaitTime);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].department, "A");
        assert_eq!(series[0].values, vec![4.2, 7.0, 1.1]);
        assert_eq!(series[1].department, "B");
        assert!(series[1].values.is_empty());
        assert_eq!(series[1].stats.count, 0);
        assert_eq!(series[1].stats.median, None);
    }

    #[test]
    fn test_caller_order_and_column_selection() {
        let records = vec![
            visit("Urology", Some(10.0), Some(8.0)),
            visit("Orthopedics", Some(20.0), Some(6.0)),
            visit("Cardiology", Some(99.0), Some(1.0)),
            visit("Urology", Some(30.0), None),
        ];
        let departments = vec!["Orthopedics".to_string(), "Urology".to_string()];

        let waits = aggregate_boxplot(&records, &departments, MetricColumn::WaitTime);
        assert_eq!(waits[0].values, vec![20.0]);
        assert_eq!(waits[1].values, vec![10.0, 30.0]);

        let scores = aggregate_boxplot(&records, &departments, MetricColumn::CareScore);
        assert_eq!(scores[1].values, vec![8.0]);
    }

    #[test]
    fn test_department_match_is_exact() {
        let records = vec![visit("urology", Some(10.0), None)];
        let series = aggregate_boxplot(&records, &["Urology"], MetricColumn::WaitTime);
        assert!(series[0].values.is_empty());
    }

    #[test]
    fn test_duplicate_departments_each_get_values() {
        let records = vec![visit("A", Some(1.0), None)];
        let series = aggregate_boxplot(&records, &["A", "A"], MetricColumn::WaitTime);
        assert_eq!(series[0].values, vec![1.0]);
        assert_eq!(series[1].values, vec![1.0]);
    }

    #[test]
    fn test_compute_stats() {
        let stats = compute_stats(&[5.0, 1.0, 3.0, 2.0, 4.0]);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.q1, Some(2.0));
        assert_eq!(stats.median, Some(3.0));
        assert_eq!(stats.q3, Some(4.0));
        assert_eq!(stats.max, Some(5.0));
        assert_eq!(stats.mean, Some(3.0));
    }

    #[test]
    fn test_compute_stats_interpolates() {
        let stats = compute_stats(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.q1, Some(1.75));
        assert_eq!(stats.median, Some(2.5));
        assert_eq!(stats.q3, Some(3.25));
    }

    #[test]
    fn test_compute_stats_single_value() {
        let stats = compute_stats(&[6.5]);
        assert_eq!(stats.min, Some(6.5));
        assert_eq!(stats.median, Some(6.5));
        assert_eq!(stats.max, Some(6.5));
    }

    #[test]
    fn test_compute_stats_empty() {
        assert_eq!(compute_stats(&[]), BoxPlotStats::default());
    }
}

//! Turn raw CSV rows into normalized [`VisitRecord`]s.
//!
//! Normalization fills blank admit sources, parses the check-in timestamp and
//! derives the calendar fields. The first bad row aborts the whole batch.

use tracing::debug;

use crate::error::{DatasetError, DatasetResult};
use crate::models::time::parse_check_in;
use crate::models::visit::{VisitRecord, NOT_IDENTIFIED};
use crate::parsing::csv_parser::{CARE_SCORE, NUMBER_OF_RECORDS, WAIT_TIME_MIN};
use crate::parsing::RawVisitRow;

/// Normalize every row, failing on the first invalid one.
pub fn normalize_rows(rows: Vec<RawVisitRow>) -> DatasetResult<Vec<VisitRecord>> {
    let total = rows.len();
    let mut filled_sources = 0usize;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            if raw.admit_source.is_none() {
                filled_sources += 1;
            }
            normalize_row(i + 1, raw)
        })
        .collect::<DatasetResult<Vec<_>>>()?;

    debug!(
        rows = total,
        filled_admit_sources = filled_sources,
        "Normalized visit rows"
    );
    Ok(records)
}

/// Normalize one row. `row` is the 1-based data row used in error messages.
pub fn normalize_row(row: usize, raw: RawVisitRow) -> DatasetResult<VisitRecord> {
    let check_in =
        parse_check_in(&raw.check_in_time).map_err(|source| DatasetError::InvalidTimestamp {
            row,
            value: raw.check_in_time.clone(),
            source,
        })?;

    let wait_time_min = parse_optional_number(row, WAIT_TIME_MIN, raw.wait_time_min)?;
    let care_score = parse_optional_number(row, CARE_SCORE, raw.care_score)?;
    let record_count = parse_record_count(row, raw.number_of_records)?;

    Ok(VisitRecord::new(
        raw.clinic_name,
        fill_admit_source(raw.admit_source),
        raw.department,
        check_in,
        wait_time_min,
        care_score,
        record_count,
    ))
}

fn fill_admit_source(source: Option<String>) -> String {
    match source {
        Some(s) if !s.trim().is_empty() => s,
        _ => NOT_IDENTIFIED.to_string(),
    }
}

fn parse_optional_number(
    row: usize,
    column: &'static str,
    value: Option<String>,
) -> DatasetResult<Option<f64>> {
    let Some(text) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(DatasetError::InvalidNumber {
            row,
            column,
            value: text,
        }),
    }
}

/// Record counts must be whole, non-negative numbers. `"1.0"` is accepted.
fn parse_record_count(row: usize, value: Option<String>) -> DatasetResult<u64> {
    let invalid = |value: String| DatasetError::InvalidNumber {
        row,
        column: NUMBER_OF_RECORDS,
        value,
    };
    let text = value.unwrap_or_default();
    let trimmed = text.trim();

    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => {
            Ok(n as u64)
        }
        _ => Err(invalid(text)),
    }
}

use serde::Deserialize;
use std::io::Read;

use crate::error::{DatasetError, DatasetResult};

pub const CLINIC_NAME: &str = "Clinic Name";
pub const ADMIT_SOURCE: &str = "Admit Source";
pub const DEPARTMENT: &str = "Department";
pub const CHECK_IN_TIME: &str = "Check-In Time";
pub const WAIT_TIME_MIN: &str = "Wait Time Min";
pub const CARE_SCORE: &str = "Care Score";
pub const NUMBER_OF_RECORDS: &str = "Number of Records";

/// Columns that must be present in the header row. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    CLINIC_NAME,
    ADMIT_SOURCE,
    DEPARTMENT,
    CHECK_IN_TIME,
    WAIT_TIME_MIN,
    CARE_SCORE,
    NUMBER_OF_RECORDS,
];

/// One CSV row exactly as it appears in the file.
///
/// Numeric cells are kept as text so the normalizer can report the offending
/// row and value when one fails to parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawVisitRow {
    #[serde(rename = "Clinic Name")]
    pub clinic_name: String,
    #[serde(rename = "Admit Source")]
    pub admit_source: Option<String>,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Check-In Time")]
    pub check_in_time: String,
    #[serde(rename = "Wait Time Min")]
    pub wait_time_min: Option<String>,
    #[serde(rename = "Care Score")]
    pub care_score: Option<String>,
    #[serde(rename = "Number of Records")]
    pub number_of_records: Option<String>,
}

/// Parse visit rows from any CSV reader with a header row.
///
/// Fields are trimmed, so a whitespace-only cell reads as blank.
pub fn parse_visit_csv<R: Read>(reader: R) -> DatasetResult<Vec<RawVisitRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    csv_reader
        .deserialize::<RawVisitRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatasetError::from)
}

/// Parse visit rows from an in-memory CSV string.
pub fn parse_visit_csv_str(content: &str) -> DatasetResult<Vec<RawVisitRow>> {
    parse_visit_csv(content.as_bytes())
}

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;
use tempfile::{Builder, NamedTempFile};

use clinic_analytics::models::CHECK_IN_FORMAT;

pub const HEADER: &str =
    "Clinic Name,Admit Source,Department,Check-In Time,Wait Time Min,Care Score,Number of Records";

pub const CLINICS: [&str; 3] = ["Acme Clinic", "Lakeside Medical", "Saint Mary"];

/// Blank entries exercise the "Not Identified" fill.
pub const SOURCES: [&str; 4] = ["Walk-in", "Physician Referral", "", "Transfer"];

pub const DEPARTMENTS: [&str; 6] = [
    "General Surgery",
    "Orthopedics",
    "Neurosurgery",
    "Plastic Surgery",
    "Urology",
    "Cardiology",
];

/// Deterministic dataset spread over roughly two weeks from Monday 2024-01-01.
pub fn sample_csv(rows: usize) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 5, 0)
        .unwrap();

    let mut content = String::from(HEADER);
    for i in 0..rows {
        let check_in = start + Duration::minutes(97 * i as i64);
        content.push_str(&format!(
            "\n{},{},{},{},{},{},{}",
            CLINICS[i % CLINICS.len()],
            SOURCES[i % SOURCES.len()],
            DEPARTMENTS[i % DEPARTMENTS.len()],
            check_in.format(CHECK_IN_FORMAT),
            (i * 7) % 90,
            (i % 10) as f64 + 0.5,
            1 + i % 3,
        ));
    }
    content.push('\n');
    content
}

pub fn write_gz_fixture(content: &str) -> NamedTempFile {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    let bytes = encoder.finish().unwrap();

    let mut file = Builder::new().suffix(".csv.gz").tempfile().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_csv_fixture(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with env vars set (`Some`) or removed (`None`), restoring the
/// previous values afterwards even if `f` panics. Calls are serialized.
pub fn with_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::capture(vars);
    for (key, value) in vars {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
    f()
}

struct EnvRestore(HashMap<String, Option<String>>);

impl EnvRestore {
    fn capture(vars: &[(&str, Option<&str>)]) -> Self {
        Self(
            vars.iter()
                .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
                .collect(),
        )
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, previous) in self.0.drain() {
            match previous {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

use crate::error::{DatasetError, DatasetResult};
use crate::models::VisitDataset;
use crate::parsing::csv_parser;
use crate::preprocessing::normalize_rows;

/// Compression of a dataset source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Plain,
    Gzip,
}

impl SourceEncoding {
    /// `*.gz` (including `*.csv.gz`) is gzip, everything else plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => SourceEncoding::Gzip,
            _ => SourceEncoding::Plain,
        }
    }
}

/// Loads and normalizes the visit dataset.
pub struct VisitLoader;

impl VisitLoader {
    /// Load from a file, decompressing `.gz` files on the fly.
    pub fn load_from_file(path: &Path) -> DatasetResult<VisitDataset> {
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let encoding = SourceEncoding::from_path(path);
        let dataset = match encoding {
            SourceEncoding::Gzip => Self::load_from_reader(GzDecoder::new(reader))?,
            SourceEncoding::Plain => Self::load_from_reader(reader)?,
        };

        let summary = dataset.summary();
        info!(
            path = %path.display(),
            ?encoding,
            records = summary.records,
            clinics = summary.clinics,
            admit_sources = summary.admit_sources,
            first_date = ?summary.first_date,
            last_date = ?summary.last_date,
            "Loaded visit dataset"
        );
        Ok(dataset)
    }

    /// Load from uncompressed CSV text
    pub fn load_from_reader<R: Read>(reader: R) -> DatasetResult<VisitDataset> {
        let rows = csv_parser::parse_visit_csv(reader)?;
        let records = normalize_rows(rows)?;
        Ok(VisitDataset::new(records))
    }

    /// Load from gzip-compressed CSV bytes
    pub fn load_from_gz_reader<R: Read>(reader: R) -> DatasetResult<VisitDataset> {
        Self::load_from_reader(GzDecoder::new(reader))
    }

    /// Load from an in-memory CSV string
    pub fn load_from_str(content: &str) -> DatasetResult<VisitDataset> {
        Self::load_from_reader(content.as_bytes())
    }
}

/// Read, validate and normalize the dataset at `path`.
pub fn load_and_normalize(path: impl AsRef<Path>) -> DatasetResult<VisitDataset> {
    VisitLoader::load_from_file(path.as_ref())
}

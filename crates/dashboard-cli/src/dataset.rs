//! Period data provisioning: CSV import/export and period lookup
//!
//! The CSV layout is one row per period with the header
//! `label,revenue,expenses,profit` (`month` is accepted for `label`).

use anyhow::{Context, Result, bail};
use dashboard_core::{PeriodRecord, sample_periods, validate_all};
use serde::Deserialize;
use std::convert::Infallible;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A period given on the command line or in config: label or index.
///
/// Kept as text until it meets a dataset, so that `"2024"` can name the
/// period labelled 2024 and `"1"` can still mean index 1.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPeriodRef")]
pub struct PeriodRef(String);

/// TOML accepts both `start = 1` and `start = "1"`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPeriodRef {
    Index(usize),
    Text(String),
}

impl From<RawPeriodRef> for PeriodRef {
    fn from(raw: RawPeriodRef) -> Self {
        match raw {
            RawPeriodRef::Index(index) => PeriodRef(index.to_string()),
            RawPeriodRef::Text(text) => PeriodRef(text.trim().to_string()),
        }
    }
}

impl FromStr for PeriodRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PeriodRef(s.trim().to_string()))
    }
}

impl PeriodRef {
    /// Index of this period in `records`.
    /// A label match (case-insensitive) wins; otherwise a number is taken as
    /// an index and passed through unchecked.
    pub fn resolve(&self, records: &[PeriodRecord]) -> Result<usize> {
        if let Some(index) = records.iter().position(|r| r.label.eq_ignore_ascii_case(&self.0)) {
            return Ok(index);
        }
        match self.0.parse::<usize>() {
            Ok(index) => Ok(index),
            Err(_) => {
                let known: Vec<_> = records.iter().map(|r| r.label.as_str()).collect();
                bail!("Unknown period '{}'. Known periods: {}", self.0, known.join(", "))
            }
        }
    }
}

/// Read period records from CSV
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<PeriodRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for (row, result) in rdr.deserialize().enumerate() {
        let record: PeriodRecord = result.with_context(|| format!("Invalid CSV row {}", row + 1))?;
        records.push(record);
    }
    validate_all(&records)?;
    Ok(records)
}

/// Load period records from a CSV file
pub fn load_from_csv(path: &Path) -> Result<Vec<PeriodRecord>> {
    let file = std::fs::File::open(path).with_context(|| format!("Failed to open dataset: {}", path.display()))?;
    read_csv(file).with_context(|| format!("Failed to load dataset: {}", path.display()))
}

/// Load the dataset at `path`, or the built-in sample when there is none
pub fn load_dataset(path: Option<&Path>) -> Result<Vec<PeriodRecord>> {
    let records = match path {
        Some(path) => {
            debug!("Loading dataset from {}", path.display());
            load_from_csv(path)?
        }
        None => {
            debug!("No dataset configured, using built-in sample");
            sample_periods()
        }
    };

    if records.is_empty() {
        bail!("Dataset contains no periods");
    }
    debug!("Loaded {} periods", records.len());
    Ok(records)
}

/// Export period records to CSV
pub fn export_to_csv(records: &[PeriodRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(s: &str) -> PeriodRef {
        s.parse().unwrap()
    }

    fn yearly() -> Vec<PeriodRecord> {
        vec![
            PeriodRecord::new("2023", 400_000.0, 250_000.0, 150_000.0),
            PeriodRecord::new("2024", 480_000.0, 290_000.0, 190_000.0),
        ]
    }

    #[test]
    fn test_period_ref_from_str_trims() {
        assert_eq!(period(" Mar "), period("Mar"));
    }

    #[test]
    fn test_resolve_label_is_case_insensitive() {
        let data = sample_periods();
        assert_eq!(period("apr").resolve(&data).unwrap(), 3);
        assert_eq!(period("3").resolve(&data).unwrap(), 3);
        assert_eq!(period("42").resolve(&data).unwrap(), 42);
    }

    #[test]
    fn test_resolve_numeric_label_before_index() {
        let data = yearly();
        assert_eq!(period("2024").resolve(&data).unwrap(), 1);
        assert_eq!(period("2023").resolve(&data).unwrap(), 0);
        assert_eq!(period("1").resolve(&data).unwrap(), 1);
    }

    #[test]
    fn test_resolve_unknown_label_lists_known() {
        let data = sample_periods();
        let err = period("Dec").resolve(&data).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown period 'Dec'"));
        assert!(msg.contains("Jan, Feb"));
    }

    #[derive(Deserialize)]
    struct Bounds {
        start: PeriodRef,
        end: PeriodRef,
    }

    #[test]
    fn test_deserialize_number_and_string_alike() {
        let bounds: Bounds = toml::from_str("start = 1\nend = \"1\"").unwrap();
        assert_eq!(bounds.start, bounds.end);
        assert_eq!(bounds.end.resolve(&sample_periods()).unwrap(), 1);
    }

    #[test]
    fn test_read_csv_with_month_header() {
        let csv = "month,revenue,expenses,profit\nJan, 45000, 28000, 17000\nFeb,52000,31000,21000\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PeriodRecord::new("Jan", 45_000.0, 28_000.0, 17_000.0));
    }

    #[test]
    fn test_read_csv_rejects_negative_measure() {
        let csv = "label,revenue,expenses,profit\nJan,45000,-1,17000\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_read_csv_rejects_missing_column() {
        let csv = "label,revenue,expenses\nJan,45000,28000\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("periods.csv");
        let data = sample_periods();

        export_to_csv(&data[1..4], &path).unwrap();
        let loaded = load_from_csv(&path).unwrap();
        assert_eq!(loaded, &data[1..4]);

        let header = std::fs::read_to_string(&path).unwrap();
        assert!(header.starts_with("label,revenue,expenses,profit"));
    }

    #[test]
    fn test_load_dataset_defaults_to_sample() {
        assert_eq!(load_dataset(None).unwrap(), sample_periods());
    }

    #[test]
    fn test_load_dataset_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "label,revenue,expenses,profit\n").unwrap();
        assert!(load_dataset(Some(&path)).is_err());
    }
}

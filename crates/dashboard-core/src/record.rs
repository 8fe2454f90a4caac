//! Period records and the measures they carry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One row of the source dataset: a period label and its three measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    #[serde(alias = "month")]
    pub label: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// A measure that does not fit the record's contract
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("period '{label}': {measure} must be a finite number, got {value}")]
    NotFinite { label: String, measure: Measure, value: f64 },
    #[error("period '{label}': {measure} must not be negative, got {value}")]
    Negative { label: String, measure: Measure, value: f64 },
    #[error("period at position {0} has an empty label")]
    EmptyLabel(usize),
}

impl PeriodRecord {
    pub fn new(label: impl Into<String>, revenue: f64, expenses: f64, profit: f64) -> Self {
        Self {
            label: label.into(),
            revenue,
            expenses,
            profit,
        }
    }

    /// Value of a single measure
    pub fn value(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Revenue => self.revenue,
            Measure::Expenses => self.expenses,
            Measure::Profit => self.profit,
        }
    }

    /// Check that every measure is a finite, non-negative number.
    /// The measures are independent: profit is not checked against revenue - expenses.
    pub fn validate(&self) -> Result<(), RecordError> {
        for measure in Measure::ALL {
            let value = self.value(measure);
            if !value.is_finite() {
                return Err(RecordError::NotFinite {
                    label: self.label.clone(),
                    measure,
                    value,
                });
            }
            if value < 0.0 {
                return Err(RecordError::Negative {
                    label: self.label.clone(),
                    measure,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Validate a whole sequence, reporting the first bad record
pub fn validate_all(records: &[PeriodRecord]) -> Result<(), RecordError> {
    for (idx, record) in records.iter().enumerate() {
        if record.label.trim().is_empty() {
            return Err(RecordError::EmptyLabel(idx));
        }
        record.validate()?;
    }
    Ok(())
}

/// The numeric columns of a period record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Revenue,
    Expenses,
    Profit,
}

impl Measure {
    /// All measures in display order
    pub const ALL: [Measure; 3] = [Measure::Revenue, Measure::Expenses, Measure::Profit];

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Measure::Revenue => "Revenue",
            Measure::Expenses => "Expenses",
            Measure::Profit => "Profit",
        }
    }

    /// Lowercase key, as used in config files and CSV headers
    pub fn key(self) -> &'static str {
        match self {
            Measure::Revenue => "revenue",
            Measure::Expenses => "expenses",
            Measure::Profit => "profit",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown measure '{0}' (expected revenue, expenses or profit)")]
pub struct ParseMeasureError(String);

impl FromStr for Measure {
    type Err = ParseMeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Measure::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseMeasureError(wanted.to_string()))
    }
}

/// Six months of sample sales data shipped with the dashboard
pub fn sample_periods() -> Vec<PeriodRecord> {
    vec![
        PeriodRecord::new("Jan", 45_000.0, 28_000.0, 17_000.0),
        PeriodRecord::new("Feb", 52_000.0, 31_000.0, 21_000.0),
        PeriodRecord::new("Mar", 48_000.0, 29_000.0, 19_000.0),
        PeriodRecord::new("Apr", 61_000.0, 35_000.0, 26_000.0),
        PeriodRecord::new("May", 58_000.0, 33_000.0, 25_000.0),
        PeriodRecord::new("Jun", 67_000.0, 38_000.0, 29_000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_ordered_jan_to_jun() {
        let labels: Vec<_> = sample_periods().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn test_value_by_measure() {
        let r = PeriodRecord::new("Jan", 1.0, 2.0, 3.0);
        assert_eq!(r.value(Measure::Revenue), 1.0);
        assert_eq!(r.value(Measure::Expenses), 2.0);
        assert_eq!(r.value(Measure::Profit), 3.0);
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let negative = PeriodRecord::new("Jan", 1.0, -2.0, 3.0);
        assert!(matches!(
            negative.validate(),
            Err(RecordError::Negative { measure: Measure::Expenses, .. })
        ));

        let nan = PeriodRecord::new("Feb", f64::NAN, 0.0, 0.0);
        assert!(matches!(
            nan.validate(),
            Err(RecordError::NotFinite { measure: Measure::Revenue, .. })
        ));
    }

    #[test]
    fn test_validate_does_not_relate_measures() {
        // profit != revenue - expenses is still a valid record
        let r = PeriodRecord::new("Jan", 10.0, 2.0, 100.0);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_validate_all_reports_empty_label() {
        let records = vec![PeriodRecord::new("Jan", 1.0, 1.0, 0.0), PeriodRecord::new(" ", 1.0, 1.0, 0.0)];
        assert_eq!(validate_all(&records), Err(RecordError::EmptyLabel(1)));
        assert!(validate_all(&sample_periods()).is_ok());
    }

    #[test]
    fn test_measure_from_str() {
        assert_eq!("Revenue".parse::<Measure>(), Ok(Measure::Revenue));
        assert_eq!(" profit ".parse::<Measure>(), Ok(Measure::Profit));
        assert!("margin".parse::<Measure>().is_err());
    }
}

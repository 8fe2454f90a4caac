//! Per-measure totals over a filtered view, and their display formatting

use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

use crate::record::{Measure, PeriodRecord};

/// Sum of each measure across a run of periods
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl Totals {
    pub fn get(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Revenue => self.revenue,
            Measure::Expenses => self.expenses,
            Measure::Profit => self.profit,
        }
    }

    fn normalized(self) -> Self {
        Self {
            revenue: normalize_zero(self.revenue),
            expenses: normalize_zero(self.expenses),
            profit: normalize_zero(self.profit),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            revenue: self.revenue + rhs.revenue,
            expenses: self.expenses + rhs.expenses,
            profit: self.profit + rhs.profit,
        }
    }
}

impl<'a> Add<&'a PeriodRecord> for Totals {
    type Output = Totals;

    fn add(self, record: &'a PeriodRecord) -> Totals {
        Totals {
            revenue: self.revenue + record.revenue,
            expenses: self.expenses + record.expenses,
            profit: self.profit + record.profit,
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::default(), |acc, t| acc + t).normalized()
    }
}

impl<'a> Sum<&'a PeriodRecord> for Totals {
    fn sum<I: Iterator<Item = &'a PeriodRecord>>(iter: I) -> Totals {
        iter.fold(Totals::default(), |acc, t| acc + t).normalized()
    }
}

/// Totals of every measure over `records`. Empty input gives all zeros.
pub fn aggregate(records: &[PeriodRecord]) -> Totals {
    records.iter().sum()
}

/// Normalize -0.0 to 0.0 for cleaner display
fn normalize_zero(val: f64) -> f64 {
    if val == 0.0 { 0.0 } else { val }
}

/// Summary card text: thousands with one decimal, e.g. `$331.0k`
pub fn format_total(value: f64) -> String {
    format!("${:.1}k", normalize_zero(value) / 1000.0)
}

/// Compact axis tick label, e.g. `70k`, `2.5k`, `800`
pub fn format_axis_value(value: f64) -> String {
    let value = normalize_zero(value);
    if value.abs() < 1000.0 {
        return format!("{:.0}", value);
    }
    let thousands = value / 1000.0;
    if thousands.fract() == 0.0 {
        format!("{:.0}k", thousands)
    } else {
        format!("{:.1}k", thousands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::filter;
    use crate::record::sample_periods;

    #[test]
    fn test_full_range_totals() {
        let data = sample_periods();
        let totals = aggregate(filter(&data, 0, 5));
        assert_eq!(totals.revenue, 331_000.0);
        assert_eq!(totals.expenses, 194_000.0);
        assert_eq!(totals.profit, 137_000.0);
    }

    #[test]
    fn test_feb_to_apr() {
        let data = sample_periods();
        let filtered = filter(&data, 1, 3);
        assert_eq!(filtered.len(), 3);
        assert_eq!(aggregate(filtered).revenue, 161_000.0);
    }

    #[test]
    fn test_inverted_range_totals_are_zero() {
        let data = sample_periods();
        let filtered = filter(&data, 4, 2);
        assert!(filtered.is_empty());
        assert_eq!(aggregate(filtered), Totals::default());
    }

    #[test]
    fn test_single_period_equals_record() {
        let data = sample_periods();
        let filtered = filter(&data, 0, 0);
        assert_eq!(filtered.len(), 1);
        assert_eq!(aggregate(filtered).revenue, 45_000.0);
    }

    #[test]
    fn test_additive_over_partitions() {
        let data = sample_periods();
        let whole = aggregate(&data);
        for split in 0..=data.len() {
            let (left, right) = data.split_at(split);
            assert_eq!(aggregate(left) + aggregate(right), whole);
        }
        let parts = [filter(&data, 0, 1), filter(&data, 2, 2), filter(&data, 3, 5)];
        let summed: Totals = parts.iter().map(|p| aggregate(p)).sum();
        assert_eq!(summed, whole);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let data = sample_periods();
        let before = data.clone();
        let first = aggregate(filter(&data, 1, 4));
        let second = aggregate(filter(&data, 1, 4));
        assert_eq!(first, second);
        assert_eq!(data, before);
    }

    #[test]
    fn test_get_matches_fields() {
        let t = aggregate(&sample_periods());
        assert_eq!(t.get(Measure::Revenue), t.revenue);
        assert_eq!(t.get(Measure::Expenses), t.expenses);
        assert_eq!(t.get(Measure::Profit), t.profit);
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(331_000.0), "$331.0k");
        assert_eq!(format_total(161_000.0), "$161.0k");
        assert_eq!(format_total(45_260.0), "$45.3k");
        assert_eq!(format_total(0.0), "$0.0k");
        assert_eq!(format_total(-0.0), "$0.0k");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(70_000.0), "70k");
        assert_eq!(format_axis_value(2_500.0), "2.5k");
        assert_eq!(format_axis_value(800.0), "800");
        assert_eq!(format_axis_value(0.0), "0");
    }
}

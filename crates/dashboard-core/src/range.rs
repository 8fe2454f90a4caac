//! Range selection over an ordered period sequence
//!
//! Filtering follows slice semantics: inverted bounds give an empty result and
//! an end past the last period is clamped. Nothing here fails; callers that want
//! to surface bad selections ask `RangeSelection::validate` or a `BoundsPolicy`.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

use crate::record::PeriodRecord;

/// Why a selection does not satisfy `0 <= start <= end <= last index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("there are no periods to select from")]
    EmptySource,
    #[error("start period {start} is after end period {end}")]
    Inverted { start: usize, end: usize },
    #[error("period index {index} is out of range (only {len} periods)")]
    OutOfBounds { index: usize, len: usize },
}

/// Inclusive pair of 0-based period indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RangeSelection {
    start: usize,
    end: usize,
}

impl RangeSelection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Selection covering every period of a sequence of `len` records
    pub fn full(len: usize) -> Self {
        Self {
            start: 0,
            end: len.saturating_sub(1),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Replace the start bound. The end bound is left alone.
    pub fn set_start(&mut self, index: usize) {
        self.start = index;
    }

    /// Replace the end bound. The start bound is left alone.
    pub fn set_end(&mut self, index: usize) {
        self.end = index;
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Half-open index range this selection covers in a sequence of `len` records
    pub fn span(&self, len: usize) -> Range<usize> {
        let end = self.end.saturating_add(1).min(len);
        let start = self.start.min(end);
        start..end
    }

    /// Check the selection against a sequence of `len` records
    pub fn validate(&self, len: usize) -> Result<(), RangeError> {
        if len == 0 {
            return Err(RangeError::EmptySource);
        }
        if self.is_inverted() {
            return Err(RangeError::Inverted {
                start: self.start,
                end: self.end,
            });
        }
        // start <= end here, so checking end covers both bounds
        if self.end >= len {
            let index = if self.start >= len { self.start } else { self.end };
            return Err(RangeError::OutOfBounds { index, len });
        }
        Ok(())
    }
}

/// Contiguous sub-sequence of `source` between `start` and `end`, inclusive
pub fn filter(source: &[PeriodRecord], start: usize, end: usize) -> &[PeriodRecord] {
    &source[RangeSelection::new(start, end).span(source.len())]
}

/// How strictly a selection is checked before use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Bad selections silently produce empty or clamped results
    #[default]
    Lenient,
    /// Bad selections are rejected with a `RangeError`
    Strict,
}

impl BoundsPolicy {
    pub fn check(self, selection: &RangeSelection, len: usize) -> Result<(), RangeError> {
        match self {
            BoundsPolicy::Lenient => Ok(()),
            BoundsPolicy::Strict => selection.validate(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_periods;

    #[test]
    fn test_valid_range_length() {
        let data = sample_periods();
        for start in 0..data.len() {
            for end in start..data.len() {
                assert_eq!(filter(&data, start, end).len(), end - start + 1);
            }
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let data = sample_periods();
        for start in 0..data.len() {
            for end in 0..start {
                assert!(filter(&data, start, end).is_empty());
            }
        }
    }

    #[test]
    fn test_filter_borrows_source_in_order() {
        let data = sample_periods();
        let filtered = filter(&data, 1, 3);
        let labels: Vec<_> = filtered.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Feb", "Mar", "Apr"]);
        assert!(std::ptr::eq(&filtered[0], &data[1]));
    }

    #[test]
    fn test_end_out_of_range_is_clamped() {
        let data = sample_periods();
        assert_eq!(filter(&data, 4, 99).len(), 2);
        assert_eq!(filter(&data, 0, usize::MAX).len(), 6);
    }

    #[test]
    fn test_start_out_of_range_is_empty() {
        let data = sample_periods();
        assert!(filter(&data, 10, 12).is_empty());
        assert!(filter(&[], 0, 0).is_empty());
    }

    #[test]
    fn test_set_bounds_is_independent() {
        let mut sel = RangeSelection::full(6);
        assert_eq!((sel.start(), sel.end()), (0, 5));

        sel.set_start(4);
        sel.set_end(2);
        assert_eq!((sel.start(), sel.end()), (4, 2));
        assert!(sel.is_inverted());
        assert_eq!(sel.span(6), 3..3);
    }

    #[test]
    fn test_full_on_empty_source() {
        let sel = RangeSelection::full(0);
        assert_eq!(sel.span(0), 0..0);
        assert_eq!(sel.validate(0), Err(RangeError::EmptySource));
    }

    #[test]
    fn test_validate() {
        assert_eq!(RangeSelection::new(1, 3).validate(6), Ok(()));
        assert_eq!(RangeSelection::new(5, 5).validate(6), Ok(()));
        assert_eq!(
            RangeSelection::new(4, 2).validate(6),
            Err(RangeError::Inverted { start: 4, end: 2 })
        );
        assert_eq!(
            RangeSelection::new(2, 6).validate(6),
            Err(RangeError::OutOfBounds { index: 6, len: 6 })
        );
        assert_eq!(
            RangeSelection::new(7, 9).validate(6),
            Err(RangeError::OutOfBounds { index: 7, len: 6 })
        );
    }

    #[test]
    fn test_policy() {
        let inverted = RangeSelection::new(4, 2);
        assert!(BoundsPolicy::Lenient.check(&inverted, 6).is_ok());
        assert!(BoundsPolicy::Strict.check(&inverted, 6).is_err());
        assert!(BoundsPolicy::Strict.check(&RangeSelection::full(6), 6).is_ok());
    }
}

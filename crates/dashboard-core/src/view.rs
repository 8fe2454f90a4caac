//! Memoized filter-then-aggregate view over an immutable period sequence
//!
//! The derived slice and totals are cached on the `(start, end)` pair and only
//! recomputed after a bound actually changes.

use std::ops::Range;

use crate::aggregate::{Totals, aggregate};
use crate::range::RangeSelection;
use crate::record::PeriodRecord;

#[derive(Debug, Clone)]
struct Cached {
    key: RangeSelection,
    span: Range<usize>,
    totals: Totals,
}

/// Everything a presentation layer needs for one render
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot<'a> {
    pub selection: RangeSelection,
    pub records: &'a [PeriodRecord],
    pub totals: Totals,
}

/// A range selection bound to its source, with the derived view cached
#[derive(Debug, Clone)]
pub struct RangeView<S> {
    source: S,
    selection: RangeSelection,
    cached: Option<Cached>,
    recomputations: usize,
}

impl<S: AsRef<[PeriodRecord]>> RangeView<S> {
    /// View over the whole source
    pub fn new(source: S) -> Self {
        let selection = RangeSelection::full(source.as_ref().len());
        Self::with_selection(source, selection)
    }

    pub fn with_selection(source: S, selection: RangeSelection) -> Self {
        Self {
            source,
            selection,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn set_start(&mut self, index: usize) {
        self.selection.set_start(index);
    }

    pub fn set_end(&mut self, index: usize) {
        self.selection.set_end(index);
    }

    pub fn set_range(&mut self, start: usize, end: usize) {
        self.selection = RangeSelection::new(start, end);
    }

    /// Number of times the derived view has been computed
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    fn refresh(&mut self) -> &Cached {
        match self.cached.take() {
            Some(cached) if cached.key == self.selection => self.cached.insert(cached),
            _ => {
                let span = self.selection.span(self.source.as_ref().len());
                let totals = aggregate(&self.source.as_ref()[span.clone()]);
                self.recomputations += 1;
                self.cached.insert(Cached {
                    key: self.selection,
                    span,
                    totals,
                })
            }
        }
    }

    /// Records inside the current selection
    pub fn filtered(&mut self) -> &[PeriodRecord] {
        let span = self.refresh().span.clone();
        &self.source.as_ref()[span]
    }

    /// Per-measure totals of the current selection
    pub fn totals(&mut self) -> Totals {
        self.refresh().totals
    }

    pub fn snapshot(&mut self) -> ViewSnapshot<'_> {
        let Cached { span, totals, .. } = self.refresh().clone();
        ViewSnapshot {
            selection: self.selection,
            records: &self.source.as_ref()[span],
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_periods;
    use std::sync::Arc;

    #[test]
    fn test_new_covers_full_range() {
        let data = sample_periods();
        let mut view = RangeView::new(data.as_slice());
        assert_eq!(view.filtered().len(), 6);
        assert_eq!(view.totals().revenue, 331_000.0);
    }

    #[test]
    fn test_recomputes_only_on_bound_change() {
        let data = sample_periods();
        let mut view = RangeView::new(data.as_slice());

        view.filtered();
        view.totals();
        view.snapshot();
        assert_eq!(view.recomputations(), 1);

        // Same bounds again: cache hit
        view.set_range(0, 5);
        view.filtered();
        assert_eq!(view.recomputations(), 1);

        view.set_start(1);
        view.set_end(3);
        assert_eq!(view.filtered().len(), 3);
        assert_eq!(view.totals().revenue, 161_000.0);
        assert_eq!(view.recomputations(), 2);
    }

    #[test]
    fn test_inverted_bounds_give_empty_snapshot() {
        let data = sample_periods();
        let mut view = RangeView::with_selection(data.as_slice(), RangeSelection::new(4, 2));
        let snap = view.snapshot();
        assert!(snap.records.is_empty());
        assert_eq!(snap.totals, Totals::default());
    }

    #[test]
    fn test_shared_source() {
        let data: Arc<[PeriodRecord]> = sample_periods().into();
        let mut a = RangeView::new(Arc::clone(&data));
        let mut b = RangeView::with_selection(Arc::clone(&data), RangeSelection::new(0, 0));
        assert_eq!(a.totals().revenue, 331_000.0);
        assert_eq!(b.totals().revenue, 45_000.0);
        assert_eq!(b.filtered()[0], data[0]);
    }

    #[test]
    fn test_snapshot_matches_direct_pipeline() {
        let data = sample_periods();
        let mut view = RangeView::with_selection(data.as_slice(), RangeSelection::new(2, 4));
        let snap = view.snapshot();
        assert_eq!(snap.records, crate::range::filter(&data, 2, 4));
        assert_eq!(snap.totals, aggregate(crate::range::filter(&data, 2, 4)));
    }
}

//! Core of the sales dashboard
//!
//! A fixed, ordered sequence of period records is narrowed to a contiguous
//! range, summed per measure and laid out as a grouped bar chart. Everything
//! here is pure and synchronous; the web page and the CLI drive it.

pub mod aggregate;
pub mod chart;
pub mod range;
pub mod record;
pub mod theme;
pub mod view;

pub use aggregate::{Totals, aggregate, format_axis_value, format_total};
pub use chart::{ChartLayout, ChartSpec, Series, ValueAxis, nice_step, value_axis};
pub use range::{BoundsPolicy, RangeError, RangeSelection, filter};
pub use record::{Measure, ParseMeasureError, PeriodRecord, RecordError, sample_periods, validate_all};
pub use theme::{ParseThemeError, Theme, ThemeName, ThemeToken};
pub use view::{RangeView, ViewSnapshot};

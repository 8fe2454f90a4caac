//! Grouped bar chart geometry
//!
//! Pure layout: one group per period, one bar per series, in SVG coordinates
//! (origin top-left, y grows downward). Renderers only draw what this returns.

use crate::record::{Measure, PeriodRecord};
use crate::theme::ThemeToken;

/// Target number of horizontal guide lines on the value axis
const TARGET_TICKS: f64 = 5.0;

/// Share of a group's width taken by its bars
const GROUP_FILL: f64 = 0.8;

/// One bar per period for this measure, colored by a theme token
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub measure: Measure,
    pub color: ThemeToken,
}

impl Series {
    /// Series for a measure with its conventional chart color
    pub fn for_measure(measure: Measure) -> Self {
        let color = match measure {
            Measure::Revenue => ThemeToken::ChartColor1,
            Measure::Expenses => ThemeToken::ChartColor2,
            Measure::Profit => ThemeToken::ChartColor3,
        };
        Self { measure, color }
    }

    pub fn name(&self) -> &'static str {
        self.measure.label()
    }
}

/// Space reserved around the plot area for axes and labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Declarative chart description: what to draw and how big
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub series: Vec<Series>,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            series: vec![
                Series::for_measure(Measure::Revenue),
                Series::for_measure(Measure::Expenses),
            ],
            width: 720.0,
            height: 400.0,
            margin: Margin {
                top: 16.0,
                right: 16.0,
                bottom: 32.0,
                left: 56.0,
            },
        }
    }
}

impl ChartSpec {
    pub fn with_series(mut self, measures: &[Measure]) -> Self {
        self.series = measures.iter().copied().map(Series::for_measure).collect();
        self
    }
}

/// Round step size for `range` split into roughly `target_lines` intervals (1, 2 or 5 times a power of ten)
pub fn nice_step(range: f64, target_lines: f64) -> f64 {
    if !(range.is_finite() && range > 0.0) || target_lines <= 0.0 {
        return 1.0;
    }
    let raw_step = range / target_lines;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Zero-based value axis
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub max: f64,
    pub ticks: Vec<f64>,
}

/// Axis covering the largest value any series shows, rounded up to a whole step
pub fn value_axis(records: &[PeriodRecord], series: &[Series]) -> ValueAxis {
    let largest = records
        .iter()
        .flat_map(|r| series.iter().map(move |s| r.value(s.measure)))
        .fold(0.0_f64, f64::max);

    if largest <= 0.0 {
        return ValueAxis {
            max: 1.0,
            ticks: vec![0.0],
        };
    }

    let step = nice_step(largest, TARGET_TICKS);
    let steps = (largest / step).ceil() as usize;
    ValueAxis {
        max: steps as f64 * step,
        ticks: (0..=steps).map(|i| i as f64 * step).collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub group: usize,
    pub measure: Measure,
    pub color: ThemeToken,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupLabel {
    pub label: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

/// Rectangle the bars are drawn in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub axis: ValueAxis,
    pub ticks: Vec<Tick>,
    pub groups: Vec<GroupLabel>,
    pub bars: Vec<Bar>,
}

impl ChartLayout {
    pub fn compute(records: &[PeriodRecord], spec: &ChartSpec) -> Self {
        let plot = PlotArea {
            x: spec.margin.left,
            y: spec.margin.top,
            width: (spec.width - spec.margin.left - spec.margin.right).max(0.0),
            height: (spec.height - spec.margin.top - spec.margin.bottom).max(0.0),
        };
        let axis = value_axis(records, &spec.series);
        let scale = |value: f64| plot.height * (value / axis.max);

        let ticks = axis
            .ticks
            .iter()
            .map(|&value| Tick {
                value,
                y: plot.bottom() - scale(value),
            })
            .collect();

        let mut groups = Vec::with_capacity(records.len());
        let mut bars = Vec::with_capacity(records.len() * spec.series.len());

        if !records.is_empty() {
            let group_width = plot.width / records.len() as f64;
            let inner = group_width * GROUP_FILL;
            let bar_width = if spec.series.is_empty() {
                0.0
            } else {
                inner / spec.series.len() as f64
            };

            for (group, record) in records.iter().enumerate() {
                let group_x = plot.x + group as f64 * group_width;
                groups.push(GroupLabel {
                    label: record.label.clone(),
                    x: group_x + group_width / 2.0,
                });

                let first_bar_x = group_x + (group_width - inner) / 2.0;
                for (slot, series) in spec.series.iter().enumerate() {
                    let value = record.value(series.measure);
                    let height = scale(value);
                    bars.push(Bar {
                        group,
                        measure: series.measure,
                        color: series.color,
                        value,
                        x: first_bar_x + slot as f64 * bar_width,
                        y: plot.bottom() - height,
                        width: bar_width,
                        height,
                    });
                }
            }
        }

        Self {
            plot,
            axis,
            ticks,
            groups,
            bars,
        }
    }
}

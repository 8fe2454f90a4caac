use dashboard_core::{ChartLayout, ChartSpec, PeriodRecord, Theme, ThemeToken, format_axis_value, format_total};
use leptos::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use super::themed;

/// Grouped SVG bar chart over `source[span]`
#[component]
pub fn BarChart(
    source: Arc<[PeriodRecord]>,
    #[prop(into)] span: Signal<Range<usize>>,
    spec: ChartSpec,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    let view_box = format!("0 0 {} {}", spec.width, spec.height);
    let legend_spec = spec.clone();

    let layout = Memo::new(move |_| ChartLayout::compute(&source[span.get()], &spec));

    // Index into `layout.bars` of the bar under the pointer
    let (hovered, set_hovered) = signal(None::<usize>);

    let chart = move || {
        let layout = layout.get();
        let theme = theme.get();
        let grid = theme.get(ThemeToken::ChartGridColor).to_string();
        let axis = theme.get(ThemeToken::ChartAxisColor).to_string();
        let font = theme.get(ThemeToken::ChartFontFamily).to_string();
        let plot = layout.plot;

        let ticks = layout
            .ticks
            .iter()
            .map(|tick| {
                view! {
                    <line
                        x1=fmt(plot.x)
                        x2=fmt(plot.right())
                        y1=fmt(tick.y)
                        y2=fmt(tick.y)
                        stroke=grid.clone()
                        stroke-dasharray="3 3"
                    />
                    <text
                        x=fmt(plot.x - 8.0)
                        y=fmt(tick.y)
                        text-anchor="end"
                        dominant-baseline="middle"
                        fill=axis.clone()
                        font-family=font.clone()
                        font-size="12"
                    >
                        {format_axis_value(tick.value)}
                    </text>
                }
            })
            .collect_view();

        let bars = layout
            .bars
            .iter()
            .enumerate()
            .map(|(idx, bar)| {
                view! {
                    <rect
                        x=fmt(bar.x)
                        y=fmt(bar.y)
                        width=fmt(bar.width)
                        height=fmt(bar.height)
                        fill=theme.get(bar.color).to_string()
                        on:mouseenter=move |_| set_hovered.set(Some(idx))
                        on:mouseleave=move |_| set_hovered.set(None)
                    />
                }
            })
            .collect_view();

        let labels = layout
            .groups
            .iter()
            .map(|group| {
                view! {
                    <text
                        x=fmt(group.x)
                        y=fmt(plot.bottom() + 20.0)
                        text-anchor="middle"
                        fill=axis.clone()
                        font-family=font.clone()
                        font-size="12"
                    >
                        {group.label.clone()}
                    </text>
                }
            })
            .collect_view();

        view! {
            <g>
                {ticks}
                {bars}
                {labels}
                <line
                    x1=fmt(plot.x)
                    x2=fmt(plot.right())
                    y1=fmt(plot.bottom())
                    y2=fmt(plot.bottom())
                    stroke=axis.clone()
                />
                <line
                    x1=fmt(plot.x)
                    x2=fmt(plot.x)
                    y1=fmt(plot.y)
                    y2=fmt(plot.bottom())
                    stroke=axis
                />
            </g>
        }
    };

    let tooltip = move || {
        let idx = hovered.get()?;
        let layout = layout.get();
        let bar = layout.bars.get(idx)?;
        let label = layout.groups.get(bar.group)?.label.clone();
        let text = format!("{} · {}: {}", label, bar.measure.label(), format_total(bar.value));
        let style = theme.with(|t| {
            themed(
                t,
                &[
                    ("background-color", ThemeToken::ChartTooltipBg),
                    ("color", ThemeToken::ColorTextPrimary),
                    ("padding", ThemeToken::SpacingXs),
                    ("border-radius", ThemeToken::RadiusSm),
                    ("box-shadow", ThemeToken::ShadowMd),
                    ("font-size", ThemeToken::FontSizeSm),
                ],
            ) + &format!(" border: 1px solid {}; display: inline-block;", t.get(ThemeToken::ColorBorder))
        });
        Some(view! { <div role="status" style=style>{text}</div> })
    };

    let legend = move || {
        theme.with(|t| {
            legend_spec
                .series
                .iter()
                .map(|series| {
                    let swatch = format!(
                        "display: inline-block; width: 0.75rem; height: 0.75rem; margin-inline-end: {}; background-color: {};",
                        t.get(ThemeToken::SpacingXs),
                        t.get(series.color)
                    );
                    let item = themed(
                        t,
                        &[
                            ("margin-inline-end", ThemeToken::SpacingMd),
                            ("font-size", ThemeToken::FontSizeSm),
                            ("color", ThemeToken::ColorTextSecondary),
                        ],
                    );
                    view! {
                        <span style=item>
                            <span style=swatch></span>
                            {series.name()}
                        </span>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <figure style="margin: 0;">
            <svg
                viewBox=view_box
                width="100%"
                role="img"
                aria-label="Grouped bar chart of the selected periods"
                preserveAspectRatio="xMidYMid meet"
            >
                {chart}
            </svg>
            <figcaption style="min-height: 2rem;">
                {legend}
                {tooltip}
            </figcaption>
        </figure>
    }
}

/// SVG coordinate attribute value
fn fmt(value: f64) -> String {
    format!("{:.2}", value)
}

use dashboard_core::{ChartSpec, PeriodRecord, RangeSelection, Theme, ThemeToken, aggregate, sample_periods};
use leptos::logging::warn;
use leptos::prelude::*;
use std::sync::Arc;

use crate::components::{BarChart, Card, RangeFilter, SummaryCards, ThemeSwitcher, preferred_theme, themed};
use crate::config::CONFIG;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let source: Arc<[PeriodRecord]> = sample_periods().into();
    let len = source.len();
    let labels: Vec<String> = source.iter().map(|r| r.label.clone()).collect();

    let (theme, set_theme) = signal(Theme::new(preferred_theme()));
    let (start, set_start) = signal(CONFIG.default_start);
    let (end, set_end) = signal(CONFIG.default_end.min(len.saturating_sub(1)));

    // Derived view, recomputed only when a bound changes
    let span = Memo::new(move |_| RangeSelection::new(start.get(), end.get()).span(len));
    let totals = Memo::new({
        let source = Arc::clone(&source);
        move |_| aggregate(&source[span.get()])
    });
    let range_error = Memo::new(move |_| RangeSelection::new(start.get(), end.get()).validate(len).err());

    Effect::new(move |_| {
        if let Some(err) = range_error.get() {
            warn!("Range selection: {}", err);
        }
    });

    let shown = Signal::derive(move || span.get().len());
    let spec = ChartSpec {
        width: CONFIG.chart.width,
        height: CONFIG.chart.height,
        ..ChartSpec::default()
    };

    let page_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("padding", ThemeToken::SpacingXl),
                    ("background-color", ThemeToken::ColorBgPrimary),
                    ("color", ThemeToken::ColorTextPrimary),
                ],
            ) + " min-height: 100vh; "
                + &t.css_variables()
        })
    };
    let title_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("font-size", ThemeToken::FontSize4xl),
                    ("font-weight", ThemeToken::FontWeightBold),
                    ("color", ThemeToken::ColorTextPrimary),
                    ("margin-block-end", ThemeToken::SpacingSm),
                ],
            ) + " margin-block-start: 0;"
        })
    };
    let subtitle_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[("font-size", ThemeToken::FontSizeBase), ("color", ThemeToken::ColorTextSecondary)],
            ) + " margin: 0;"
        })
    };
    let note_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("margin-block-start", ThemeToken::SpacingXl),
                    ("padding", ThemeToken::SpacingMd),
                    ("background-color", ThemeToken::ColorInfoBg),
                    ("border-radius", ThemeToken::RadiusMd),
                    ("font-size", ThemeToken::FontSizeSm),
                    ("color", ThemeToken::ColorTextSecondary),
                ],
            ) + &format!(" border: 1px solid {};", t.get(ThemeToken::ColorInfoBorder))
        })
    };

    view! {
        <main style=page_style>
            // Header
            <header style="display: flex; flex-wrap: wrap; justify-content: space-between; align-items: flex-start; gap: 1rem; margin-block-end: 2rem;">
                <div>
                    <h1 style=title_style>{CONFIG.title}</h1>
                    <p style=subtitle_style>{CONFIG.subtitle}</p>
                </div>
                <ThemeSwitcher theme=theme set_theme=set_theme />
            </header>

            // Filter controls
            <RangeFilter
                labels=labels
                start=start
                set_start=set_start
                end=end
                set_end=set_end
                shown=shown
                error=range_error
                theme=theme
            />

            // Chart and totals
            <Card theme=theme title=CONFIG.chart_title>
                <BarChart source=source span=span spec=spec theme=theme />
                <SummaryCards totals=totals theme=theme />
            </Card>

            // Theme info
            <div style=note_style>
                <strong>"Theme support: "</strong>
                {CONFIG.theme_note}
            </div>
        </main>
    }
}

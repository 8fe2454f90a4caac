use dashboard_core::{Measure, Theme, ThemeToken, Totals, format_total};
use leptos::prelude::*;

use super::themed;

/// One card per measure with its total over the selected periods
#[component]
pub fn SummaryCards(#[prop(into)] totals: Signal<Totals>, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let grid_style = move || {
        theme.with(|t| {
            themed(t, &[("gap", ThemeToken::SpacingMd), ("margin-block-start", ThemeToken::SpacingLg)])
                + " display: grid; grid-template-columns: repeat(3, 1fr);"
        })
    };
    let card_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("padding", ThemeToken::SpacingMd),
                    ("background-color", ThemeToken::ColorBgSecondary),
                    ("border-radius", ThemeToken::RadiusMd),
                ],
            ) + " text-align: center;"
        })
    };
    let label_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("font-size", ThemeToken::FontSizeSm),
                    ("color", ThemeToken::ColorTextSecondary),
                    ("margin-block-end", ThemeToken::SpacingXs),
                ],
            )
        })
    };
    let value_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("font-size", ThemeToken::FontSize3xl),
                    ("font-weight", ThemeToken::FontWeightBold),
                    ("color", ThemeToken::ColorTextPrimary),
                ],
            )
        })
    };

    view! {
        <div style=grid_style>
            {Measure::ALL
                .into_iter()
                .map(|measure| view! {
                    <div style=card_style>
                        <div style=label_style>{measure.label()}</div>
                        <div style=value_style>
                            {move || format_total(totals.get().get(measure))}
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

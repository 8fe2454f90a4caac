use dashboard_core::{RangeError, Theme, ThemeToken};
use leptos::prelude::*;

use super::themed;

/// Start/end period selectors with a running count of the periods shown
#[component]
pub fn RangeFilter(
    labels: Vec<String>,
    start: ReadSignal<usize>,
    set_start: WriteSignal<usize>,
    end: ReadSignal<usize>,
    set_end: WriteSignal<usize>,
    #[prop(into)] shown: Signal<usize>,
    #[prop(into)] error: Signal<Option<RangeError>>,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    let panel_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("gap", ThemeToken::SpacingMd),
                    ("margin-block-end", ThemeToken::SpacingXl),
                    ("padding", ThemeToken::SpacingMd),
                    ("background-color", ThemeToken::ColorBgSecondary),
                    ("border-radius", ThemeToken::RadiusLg),
                    ("box-shadow", ThemeToken::ShadowSm),
                ],
            ) + " display: flex; flex-wrap: wrap; align-items: flex-end;"
        })
    };
    let count_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("font-size", ThemeToken::FontSizeSm),
                    ("color", ThemeToken::ColorTextSecondary),
                    ("padding-inline", ThemeToken::SpacingMd),
                ],
            )
        })
    };
    let error_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("font-size", ThemeToken::FontSizeSm),
                    ("color", ThemeToken::ColorTextPrimary),
                    ("padding", ThemeToken::SpacingSm),
                    ("border-radius", ThemeToken::RadiusSm),
                    ("background-color", ThemeToken::ColorInfoBg),
                ],
            ) + &format!(
                " border: 1px solid {}; flex-basis: 100%; margin: 0;",
                t.get(ThemeToken::ChartColor2)
            )
        })
    };

    view! {
        <div style=panel_style>
            <PeriodSelect
                label="Start Month"
                labels=labels.clone()
                selected=start
                on_select=move |i| set_start.set(i)
                theme=theme
            />
            <PeriodSelect
                label="End Month"
                labels=labels
                selected=end
                on_select=move |i| set_end.set(i)
                theme=theme
            />
            <div style=count_style aria-live="polite">
                {move || showing_label(shown.get())}
            </div>
            {move || error.get().map(|err| view! {
                <p role="alert" style=error_style>
                    {err.to_string()} ". Adjust the range to see data."
                </p>
            })}
        </div>
    }
}

#[component]
fn PeriodSelect(
    label: &'static str,
    labels: Vec<String>,
    selected: ReadSignal<usize>,
    on_select: impl Fn(usize) + Send + Sync + 'static,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    let label_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("font-size", ThemeToken::FontSizeSm),
                    ("font-weight", ThemeToken::FontWeightMedium),
                    ("color", ThemeToken::ColorTextSecondary),
                    ("margin-block-end", ThemeToken::SpacingXs),
                ],
            ) + " display: block;"
        })
    };
    let select_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("height", ThemeToken::InputHeight),
                    ("padding-inline", ThemeToken::InputPaddingInline),
                    ("background-color", ThemeToken::InputBg),
                    ("border-radius", ThemeToken::RadiusMd),
                    ("font-size", ThemeToken::FontSizeBase),
                    ("color", ThemeToken::InputTextColor),
                ],
            ) + &format!(
                " width: 100%; cursor: pointer; border: 1px solid {};",
                t.get(ThemeToken::InputBorderColor)
            )
        })
    };

    view! {
        <label style="flex: 1; min-width: 8rem;">
            <span style=label_style>{label}</span>
            <select
                style=select_style
                on:change=move |ev| {
                    if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                        on_select(index);
                    }
                }
            >
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| view! {
                        <option value=i.to_string() prop:selected=move || selected.get() == i>
                            {name}
                        </option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Counter text under the selectors
pub fn showing_label(count: usize) -> String {
    match count {
        1 => "Showing 1 month".to_string(),
        n => format!("Showing {} months", n),
    }
}

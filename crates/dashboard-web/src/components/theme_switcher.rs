use dashboard_core::{Theme, ThemeName, ThemeToken};
use leptos::logging::log;
use leptos::prelude::*;

use super::themed;

/// Light / dark / brand toggle
#[component]
pub fn ThemeSwitcher(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    view! {
        <div role="group" aria-label="Theme" style="display: flex; gap: 0.5rem;">
            {ThemeName::ALL
                .into_iter()
                .map(|name| {
                    let active = move || theme.with(|t| t.name() == name);
                    let button_style = move || {
                        theme.with(|t| {
                            let (bg, fg) = if t.name() == name {
                                (ThemeToken::ChartColor1, ThemeToken::ColorBgPrimary)
                            } else {
                                (ThemeToken::InputBg, ThemeToken::InputTextColor)
                            };
                            themed(
                                t,
                                &[
                                    ("background-color", bg),
                                    ("color", fg),
                                    ("padding-inline", ThemeToken::SpacingMd),
                                    ("border-radius", ThemeToken::RadiusMd),
                                    ("font-size", ThemeToken::FontSizeSm),
                                ],
                            ) + &format!(
                                " height: 2rem; cursor: pointer; border: 1px solid {};",
                                t.get(ThemeToken::InputBorderColor)
                            )
                        })
                    };
                    view! {
                        <button
                            type="button"
                            style=button_style
                            aria-pressed=move || active().to_string()
                            on:click=move |_| {
                                log!("Switching theme to {}", name);
                                set_theme.update(|t| *t = t.clone().with_name(name));
                            }
                        >
                            {name.key()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Initial preset: dark when the browser asks for it
pub fn preferred_theme() -> ThemeName {
    if prefers_dark_scheme() { ThemeName::Dark } else { ThemeName::Light }
}

/// Check if user prefers a dark color scheme
fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

use dashboard_core::{Theme, ThemeToken};
use leptos::prelude::*;

use super::themed;

/// Bordered panel with an optional heading
#[component]
pub fn Card(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let card_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("padding", ThemeToken::SpacingLg),
                    ("background-color", ThemeToken::ColorBgPrimary),
                    ("border-radius", ThemeToken::RadiusLg),
                    ("box-shadow", ThemeToken::ShadowMd),
                ],
            ) + &format!(" border: 1px solid {};", t.get(ThemeToken::ColorBorder))
        })
    };
    let heading_style = move || {
        theme.with(|t| {
            themed(
                t,
                &[
                    ("font-size", ThemeToken::FontSize2xl),
                    ("font-weight", ThemeToken::FontWeightSemibold),
                    ("color", ThemeToken::ColorTextPrimary),
                    ("margin-block-end", ThemeToken::SpacingLg),
                ],
            ) + " margin-block-start: 0;"
        })
    };

    view! {
        <section style=card_style>
            {title.map(|title| view! { <h2 style=heading_style>{title}</h2> })}
            {children()}
        </section>
    }
}

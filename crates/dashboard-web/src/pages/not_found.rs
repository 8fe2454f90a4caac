use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main style="max-width: 80ch; margin: 0 auto; padding: 2rem 1rem; text-align: center;">
            <p>"404 - Page not found"</p>
            <A href="/">"← back to the dashboard"</A>
        </main>
    }
}

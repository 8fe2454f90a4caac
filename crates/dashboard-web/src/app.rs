use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::CONFIG;
use crate::pages::{DashboardPage, NotFound};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=CONFIG.title />
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=DashboardPage />
            </Routes>
        </Router>
    }
}

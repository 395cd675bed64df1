use crate::components::SearchHeader;
use crate::pages::{HomePage, SearchPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Tailwind bundle written by cargo-leptos to `<site-pkg-dir>/<output-name>.css`.
pub const STYLESHEET: &str = "/pkg/hearth.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href=STYLESHEET />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <Title formatter=|text| format!("{} - Hearth", text) text="Stays" />
            </head>

            <body class="bg-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                <SearchHeader />
                <Routes fallback=|| "Page not found".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </div>
        </Router>
    }
}

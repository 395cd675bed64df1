use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::search::{DateRange, SearchQuery};
use crate::utils::time::short_label;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| {
        query_map.with(|map| SearchQuery::from_lookup(|key| map.get(key)))
    });

    view! {
        <main class="flex-grow max-w-7xl px-8 mx-auto sm:px-16">
            <section class="pt-14">
                {move || match query.get() {
                    Ok(query) => {
                        let nights = DateRange::new(query.start_date, query.end_date).nights();
                        Either::Left(
                            view! {
                                <p class="text-xs text-gray-500">
                                    {format!(
                                        "{} - {} · {} night(s) · {}",
                                        short_label(query.start_date),
                                        short_label(query.end_date),
                                        nights,
                                        query.guests().label(),
                                    )}
                                </p>
                                <h1 class="mt-2 mb-6 text-3xl font-semibold">
                                    {format!("Stays in {}", query.location)}
                                </h1>
                            },
                        )
                    }
                    Err(e) => {
                        tracing::warn!("unusable search query: {e}");
                        Either::Right(
                            view! {
                                <p class="py-8 text-center text-red-500">
                                    "Invalid search: " {e.to_string()}
                                </p>
                            },
                        )
                    }
                }}
            </section>
        </main>
    }
}

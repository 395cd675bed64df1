use leptos::either::Either;
use leptos::prelude::*;

use crate::components::ListingSummaryCard;
use crate::listings::explore_nearby;

pub mod search;
pub use search::SearchPage;

#[component]
pub fn HomePage() -> impl IntoView {
    let listings = match explore_nearby() {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("failed to load explore nearby listings: {e}");
            Vec::new()
        }
    };

    view! {
        <main class="max-w-7xl px-8 mx-auto sm:px-16">
            <section class="pt-6">
                <h2 class="pb-5 text-4xl font-semibold">"Explore Nearby"</h2>
                {if listings.is_empty() {
                    Either::Left(view! { <p class="text-gray-500">"Nothing nearby yet."</p> })
                } else {
                    Either::Right(
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                                {listings
                                    .into_iter()
                                    .map(|listing| view! { <ListingSummaryCard listing=listing /> })
                                    .collect_view()}
                            </div>
                        },
                    )
                }}
            </section>
        </main>
    }
}

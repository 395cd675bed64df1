use leptos::prelude::*;

use crate::listings::ListingSummary;

#[component]
pub fn ListingCard(
    #[prop(into)] img: String,
    #[prop(into)] location: String,
    #[prop(into)] distance: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center m-2 mt-5 space-x-4 cursor-pointer rounded-xl transition-transform duration-200 ease-out hover:bg-gray-100 hover:scale-105">
            <div class="relative w-16 h-16 overflow-hidden rounded-lg">
                <img
                    class="absolute inset-0 h-full w-full object-cover"
                    src=img
                    alt=location.clone()
                    loading="lazy"
                />
            </div>
            <div>
                <h2>{location}</h2>
                <h3 class="text-gray-500">{distance}</h3>
            </div>
        </div>
    }
}

/// Convenience wrapper rendering a card straight from a [`ListingSummary`].
#[component]
pub fn ListingSummaryCard(listing: ListingSummary) -> impl IntoView {
    let ListingSummary {
        img,
        location,
        distance,
    } = listing;
    view! { <ListingCard img=img location=location distance=distance /> }
}

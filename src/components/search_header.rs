use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map, use_url};

use crate::components::date_range_picker::DateRangePicker;
use crate::components::icons::{GLOBE, Icon, MENU, SEARCH, USER_CIRCLE, USERS};
use crate::components::media_query::use_media_query;
use crate::search::{
    Breakpoint, DateRange, GuestCount, NavigationRequest, SEARCH_ROUTE, SearchHeaderState,
    SearchQuery, select_variant,
};
use crate::utils::time::today;

pub const DEFAULT_PLACEHOLDER: &str = "Start your search";

#[component]
pub fn SearchHeader(
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] breakpoint: Option<Breakpoint>,
) -> impl IntoView {
    let min_date = today();
    let state = RwSignal::new(SearchHeaderState::new(min_date));
    let navigate = use_navigate();
    let route = use_url();
    let query_map = use_query_map();

    let is_small_screen = use_media_query(breakpoint.unwrap_or_default().media_query());
    let variant = Signal::derive(move || select_variant(is_small_screen.get()));

    let placeholder_text = Memo::new(move |_| {
        let on_search_page = route.read().path() == SEARCH_ROUTE;
        let from_query = on_search_page
            .then(|| query_map.with(|map| SearchQuery::from_lookup(|key| map.get(key)).ok()))
            .flatten()
            .map(|query| query.placeholder());
        from_query
            .or_else(|| placeholder.clone())
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
    });

    let submit = Callback::new(move |_: ()| {
        state.with_untracked(|s| {
            s.submit_search(&mut |request: NavigationRequest| {
                navigate(&request.href(), Default::default())
            })
        });
    });
    let cancel = move || state.update(|s| s.cancel());

    let date_range = Signal::derive(move || state.with(|s| s.date_range()));
    let on_range_change = Callback::new(move |range: DateRange| {
        state.update(|s| s.select_date_range(range.start, range.end))
    });

    view! {
        <header class="sticky top-0 z-50 grid grid-cols-3 px-5 py-5 bg-white shadow-md md:px-10">
            <a href="/" class="relative flex items-center h-10 my-auto gap-2 cursor-pointer">
                <img class="h-10 object-contain object-left" src="/logo.svg" alt="Hearth" />
            </a>

            <div class="flex items-center py-2 rounded-full md:border-2 md:shadow-sm">
                <input
                    type="text"
                    class="flex-grow pl-5 text-sm text-gray-600 placeholder-gray-400 bg-transparent outline-none"
                    placeholder=move || placeholder_text.get()
                    prop:value=move || state.with(|s| s.query_text().to_string())
                    on:input=move |ev| state.update(|s| s.set_query_text(event_target_value(&ev)))
                    on:keydown=move |ev| match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            submit.run(());
                        }
                        "Escape" => cancel(),
                        _ => {}
                    }
                />
                <button
                    type="button"
                    class="hidden p-2 mx-2 text-white bg-red-400 rounded-full cursor-pointer md:inline-flex"
                    on:click=move |_| submit.run(())
                >
                    <Icon path=SEARCH class="h-4 w-4" />
                </button>
            </div>

            <div class="flex items-center justify-end space-x-4 text-gray-500">
                <p class="hidden cursor-pointer md:inline">"Become a host"</p>
                <Icon path=GLOBE />
                <div class="flex items-center p-2 space-x-2 border-2 rounded-full">
                    <Icon path=MENU />
                    <Icon path=USER_CIRCLE />
                </div>
            </div>

            <Show when=move || state.with(|s| s.picker_visible())>
                <div class="flex flex-col col-span-3 mx-auto mt-5">
                    <DateRangePicker
                        ranges=date_range
                        min_date=min_date
                        variant=variant
                        on_change=on_range_change
                    />
                    <div class="flex items-center mb-4 border-b">
                        <h2 class="flex-grow text-2xl font-semibold">"Number of Guests"</h2>
                        <Icon path=USERS class="h-5 w-5" />
                        <input
                            type="number"
                            min={GuestCount::ADVISORY_MIN.to_string()}
                            class="w-12 pl-2 text-lg text-red-400 outline-none"
                            prop:value=move || state.with(|s| s.guest_count().as_str().to_string())
                            on:input=move |ev| {
                                state.update(|s| s.set_guest_count(event_target_value(&ev)))
                            }
                        />
                    </div>
                    <div class="flex">
                        <button
                            type="button"
                            class="flex-grow text-gray-500"
                            on:click=move |_| state.update(|s| s.cancel())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="flex-grow text-red-400"
                            on:click=move |_| submit.run(())
                        >
                            "Search"
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}

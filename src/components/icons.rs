use leptos::prelude::*;

pub const SEARCH: &str = "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z";
pub const GLOBE: &str = "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9";
pub const MENU: &str = "M4 6h16M4 12h16M4 18h16";
pub const USER_CIRCLE: &str = "M5.121 17.804A13.937 13.937 0 0112 16c2.5 0 4.847.655 6.879 1.804M15 10a3 3 0 11-6 0 3 3 0 016 0zm6 2a9 9 0 11-18 0 9 9 0 0118 0z";
pub const USERS: &str = "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z";
pub const CHEVRON_LEFT: &str = "M15 19l-7-7 7-7";
pub const CHEVRON_RIGHT: &str = "M9 5l7 7-7 7";

/// Outline icon drawn from a single 24x24 path.
#[component]
pub fn Icon(path: &'static str, #[prop(default = "h-6 w-6")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            class=class
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}

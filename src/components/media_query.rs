use leptos::prelude::*;

/// Tracks whether `query` currently matches the viewport.
///
/// Reports `false` until hydrated; the server never matches.
pub fn use_media_query(query: String) -> Signal<bool> {
    let matches = RwSignal::new(false);

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = query;
    }

    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        use wasm_bindgen::JsCast;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let list = match window.match_media(&query) {
                Ok(Some(list)) => list,
                _ => {
                    tracing::warn!("media query {query:?} is not supported");
                    return;
                }
            };
            matches.set(list.matches());

            let callback = wasm_bindgen::closure::Closure::wrap(Box::new(
                move |event: web_sys::MediaQueryListEvent| {
                    matches.set(event.matches());
                },
            )
                as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
            if list
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .is_err()
            {
                return;
            }

            let handle = MediaQueryListener { list, callback };
            on_cleanup(move || drop(handle));
        });
    }

    matches.into()
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
struct MediaQueryListener {
    list: web_sys::MediaQueryList,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
impl Drop for MediaQueryListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
unsafe impl Send for MediaQueryListener {}
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
unsafe impl Sync for MediaQueryListener {}

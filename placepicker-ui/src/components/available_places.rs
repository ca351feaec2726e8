//! Available Places Component
//!
//! Loads the catalog once on mount and lists it.

use leptos::*;

use super::{ErrorPage, Places};
use crate::api;
use crate::state::{FetchState, Place, ERROR_TITLE};

/// Title and message of the error panel, if the fetch failed
pub fn failure_panel(state: &FetchState<Vec<Place>>) -> Option<(&'static str, String)> {
    state.error().map(|message| (ERROR_TITLE, message.to_string()))
}

#[component]
pub fn AvailablePlaces(
    #[prop(into)]
    on_select_place: Callback<Place>,
) -> impl IntoView {
    let fetch = create_rw_signal(FetchState::<Vec<Place>>::default());

    if fetch.try_update(|state| state.start()).unwrap_or(false) {
        spawn_local(async move {
            let result = api::fetch_available_places().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch places: {}", e).into());
            }
            let _ = fetch.try_update(|state| state.resolve(result));
        });
    }

    let failure = create_memo(move |_| fetch.with(failure_panel));
    let is_loading = Signal::derive(move || fetch.with(|state| state.is_loading()));
    let places = Signal::derive(move || {
        fetch.with(|state| state.value().cloned().unwrap_or_default())
    });

    move || match failure.get() {
        Some((title, message)) => view! {
            <ErrorPage title=title message=message />
        }.into_view(),
        None => view! {
            <Places
                title="Available Places"
                places=places
                fallback_text="No places available."
                is_loading=is_loading
                loading_text="Fetching places"
                on_select_place=on_select_place
            />
        }.into_view(),
    }
}

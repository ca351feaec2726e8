//! App Root Component
//!
//! Owns the saved list and wires the catalog, the saved list and the two
//! dialogs together.

use leptos::*;

use crate::components::{
    provide_modal_layers, AvailablePlaces, DeleteConfirmation, ErrorPage, Modal, Places,
};
use crate::state::{PickerState, Place, ERROR_TITLE};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_modal_layers();
    let state = PickerState::new();
    state.load_user_places();

    let saved_places = Signal::derive(move || state.places());
    let error_open = Signal::derive(move || state.error.with(Option::is_some));
    let error_message = Signal::derive(move || {
        state
            .error
            .with(|error| error.as_ref().map(|e| e.message.clone()).unwrap_or_default())
    });

    let dismiss_error = Callback::new(move |_: ()| state.dismiss_error());
    let stop_remove = Callback::new(move |_: ()| state.stop_remove());
    let confirm_remove = Callback::new(move |_: ()| state.confirm_remove());

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <Modal open=Signal::from(state.modal_open) on_close=stop_remove>
                <DeleteConfirmation on_confirm=confirm_remove on_cancel=stop_remove />
            </Modal>

            <Modal open=error_open on_close=dismiss_error>
                <ErrorPage
                    title=ERROR_TITLE
                    message=error_message
                    on_confirm=dismiss_error
                />
            </Modal>

            <header class="text-center py-10">
                <h1 class="text-4xl font-bold text-amber-300">"PlacePicker"</h1>
                <p class="text-gray-400 mt-2 max-w-xl mx-auto">
                    "Create your personal collection of places you would like to visit or you have visited."
                </p>
            </header>

            <main class="container mx-auto px-4 pb-12">
                <Places
                    title="I'd like to visit ..."
                    places=saved_places
                    fallback_text="Select the places you would like to visit below."
                    is_loading=Signal::from(state.loading)
                    loading_text="Fetching your places"
                    on_select_place=move |place: Place| state.start_remove(place)
                />

                <AvailablePlaces on_select_place=move |place: Place| state.select_place(place) />
            </main>
        </div>
    }
}

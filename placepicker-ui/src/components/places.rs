//! Places List Component
//!
//! Shared list view for the catalog and the saved list.

use leptos::*;

use crate::api;
use crate::state::Place;

/// What the list view shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListContent {
    Loading,
    Fallback,
    Entries,
}

impl ListContent {
    /// Loading wins over an empty list; an empty list shows the fallback
    pub fn pick(is_loading: bool, is_empty: bool) -> Self {
        if is_loading {
            ListContent::Loading
        } else if is_empty {
            ListContent::Fallback
        } else {
            ListContent::Entries
        }
    }
}

/// A titled list of places; clicking an entry hands its full record to
/// `on_select_place`
#[component]
pub fn Places(
    #[prop(into)]
    title: String,
    #[prop(into)]
    places: Signal<Vec<Place>>,
    #[prop(into)]
    fallback_text: String,
    #[prop(into, default = MaybeSignal::Static(false))]
    is_loading: MaybeSignal<bool>,
    #[prop(optional, into)]
    loading_text: String,
    #[prop(into)]
    on_select_place: Callback<Place>,
) -> impl IntoView {
    let api_base = store_value(api::get_api_base());
    let content = create_memo(move |_| {
        ListContent::pick(is_loading.get(), places.with(|places| places.is_empty()))
    });

    view! {
        <section class="bg-gray-800 rounded-lg p-6 mb-8">
            <h2 class="text-2xl font-bold text-amber-300 mb-4 text-center">{title}</h2>

            {move || match content.get() {
                ListContent::Loading => view! {
                    <p class="text-center text-gray-400">{loading_text.clone()}</p>
                }.into_view(),
                ListContent::Fallback => view! {
                    <p class="text-center text-gray-400">{fallback_text.clone()}</p>
                }.into_view(),
                ListContent::Entries => view! {
                    <ul class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                        <For
                            each=move || places.get()
                            key=|place| place.id.clone()
                            children=move |place| view! {
                                <PlaceItem
                                    place=place
                                    api_base=api_base.get_value()
                                    on_select=on_select_place
                                />
                            }
                        />
                    </ul>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn PlaceItem(
    place: Place,
    api_base: String,
    on_select: Callback<Place>,
) -> impl IntoView {
    let image = place.image_url(&api_base);
    let alt = place.image_alt();
    let title = place.title.clone();

    view! {
        <li>
            <button
                class="w-full bg-gray-700 hover:bg-gray-600 rounded-lg overflow-hidden transition-colors"
                on:click=move |_| on_select.call(place.clone())
            >
                {image.map(|src| view! {
                    <img class="w-full h-40 object-cover" src=src alt=alt />
                })}
                <h3 class="p-3 font-semibold text-white">{title}</h3>
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_wins() {
        assert_eq!(ListContent::pick(true, true), ListContent::Loading);
        assert_eq!(ListContent::pick(true, false), ListContent::Loading);
    }

    #[test]
    fn test_empty_shows_fallback() {
        assert_eq!(ListContent::pick(false, true), ListContent::Fallback);
    }

    #[test]
    fn test_entries() {
        assert_eq!(ListContent::pick(false, false), ListContent::Entries);
    }
}

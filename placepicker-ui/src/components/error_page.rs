//! Error Panel Component

use leptos::*;

/// Static error panel with an optional "Okay" button
#[component]
pub fn ErrorPage(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: MaybeSignal<String>,
    #[prop(optional, into)]
    on_confirm: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="text-center py-6">
            <h2 class="text-xl font-bold text-red-400 mb-2">{title}</h2>
            <p class="text-gray-300 mb-4">{move || message.get()}</p>
            {on_confirm.map(|on_confirm| view! {
                <div class="flex justify-end">
                    <button
                        class="px-4 py-2 bg-amber-500 hover:bg-amber-600 text-gray-900 rounded-lg font-medium"
                        on:click=move |_| on_confirm.call(())
                    >
                        "Okay"
                    </button>
                </div>
            })}
        </div>
    }
}

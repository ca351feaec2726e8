//! Delete Confirmation Component
//!
//! Asks before removing a saved place. Confirms on its own once the
//! countdown runs out.

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;

/// Time until the removal confirms itself
pub const AUTO_CONFIRM_MS: u32 = 3000;

const TICK_MS: u32 = 10;

#[component]
pub fn DeleteConfirmation(
    #[prop(into)]
    on_confirm: Callback<()>,
    #[prop(into)]
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (remaining, set_remaining) = create_signal(AUTO_CONFIRM_MS);
    // Set once either answer is given; later answers are ignored
    let settled = store_value(false);

    let answer = move |callback: Callback<()>| {
        if !settled.get_value() {
            settled.set_value(true);
            callback.call(());
        }
    };

    let timeout = Timeout::new(AUTO_CONFIRM_MS, move || answer(on_confirm));
    let interval = Interval::new(TICK_MS, move || {
        set_remaining.update(|ms| *ms = ms.saturating_sub(TICK_MS));
    });
    on_cleanup(move || {
        drop(timeout);
        drop(interval);
    });

    view! {
        <div>
            <h2 class="text-xl font-bold mb-2">"Are you sure?"</h2>
            <p class="text-gray-300 mb-6">"Do you really want to remove this place?"</p>
            <div class="flex justify-end space-x-3">
                <button
                    class="px-4 py-2 text-gray-300 hover:text-white"
                    on:click=move |_| answer(on_cancel)
                >
                    "No"
                </button>
                <button
                    class="px-4 py-2 bg-amber-500 hover:bg-amber-600 text-gray-900 rounded-lg font-medium"
                    on:click=move |_| answer(on_confirm)
                >
                    "Yes"
                </button>
            </div>
            <progress
                class="w-full mt-4"
                value=move || remaining.get()
                max=AUTO_CONFIRM_MS
            />
        </div>
    }
}

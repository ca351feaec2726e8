//! Modal Component
//!
//! Overlay dialog. Content is mounted only while open, so components
//! inside start fresh each time it opens. Open modals stack; Escape closes
//! only the one opened last.

use leptos::*;

/// Open modals in the order they opened
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerStack {
    open: Vec<usize>,
    next_id: usize,
}

impl LayerStack {
    /// Hand out an id for a new modal
    pub fn register(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    /// Put `id` on top; reopening moves it up
    pub fn opened(&mut self, id: usize) {
        self.open.retain(|open| *open != id);
        self.open.push(id);
    }

    pub fn closed(&mut self, id: usize) {
        self.open.retain(|open| *open != id);
    }

    pub fn is_top(&self, id: usize) -> bool {
        self.open.last() == Some(&id)
    }
}

/// Layer stack shared by every modal below the provider
#[derive(Clone, Copy)]
pub struct ModalLayers(StoredValue<LayerStack>);

/// Provide the layer stack to the component tree
pub fn provide_modal_layers() -> ModalLayers {
    let layers = ModalLayers(store_value(LayerStack::default()));
    provide_context(layers);
    layers
}

/// Dialog shown while `open` is true
///
/// `on_close` fires on a backdrop click, or on Escape when this is the
/// topmost open modal.
#[component]
pub fn Modal(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    let ModalLayers(layers) = use_context::<ModalLayers>()
        .unwrap_or_else(|| ModalLayers(store_value(LayerStack::default())));
    let id = layers.try_update_value(|stack| stack.register()).unwrap_or_default();

    create_effect(move |_| {
        let is_open = open.get();
        layers.update_value(|stack| {
            if is_open {
                stack.opened(id);
            } else {
                stack.closed(id);
            }
        });
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" || ev.default_prevented() || !open.get_untracked() {
            return;
        }
        if layers.with_value(|stack| stack.is_top(id)) {
            // Handled; modals further down skip this key press
            ev.prevent_default();
            on_close.call(());
        }
    });
    on_cleanup(move || {
        escape.remove();
        layers.update_value(|stack| stack.closed(id));
    });

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 bg-black/70 flex items-center justify-center"
                on:click=move |_| on_close.call(())
            >
                <div
                    class="bg-gray-800 text-white rounded-lg shadow-xl p-6 max-w-md w-full"
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                >
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_opened_is_top() {
        let mut stack = LayerStack::default();
        let removal = stack.register();
        let error = stack.register();

        stack.opened(removal);
        stack.opened(error);

        assert!(stack.is_top(error));
        assert!(!stack.is_top(removal));
    }

    #[test]
    fn test_closing_top_exposes_next() {
        let mut stack = LayerStack::default();
        let removal = stack.register();
        let error = stack.register();
        stack.opened(removal);
        stack.opened(error);

        stack.closed(error);

        assert!(stack.is_top(removal));
    }

    #[test]
    fn test_reopened_modal_moves_up() {
        let mut stack = LayerStack::default();
        let first = stack.register();
        let second = stack.register();
        stack.opened(first);
        stack.opened(second);

        stack.opened(first);

        assert!(stack.is_top(first));
        stack.closed(first);
        stack.closed(second);
        assert!(!stack.is_top(first));
        assert!(!stack.is_top(second));
    }
}

//! Picker State
//!
//! Reactive state of the App container and the add/remove flows that
//! drive it. Each flow is split into a synchronous begin step (optimistic
//! local change) and a finish step (apply the server's verdict), with the
//! request in between.
//!
//! Catalog selections are ignored until the saved list has loaded: the add
//! sends the whole list, so sending it before the server's copy arrived
//! would overwrite the saved places with the new one alone.

use leptos::*;

use super::place::Place;
use super::user_places::{Mutation, UserPlaces};
use crate::api;

/// Title of every error surface
pub const ERROR_TITLE: &str = "An error occurred!";

const LOAD_FALLBACK: &str = "Something went bad";
const ADD_FAILED: &str = "Could not add place to visit list";
const ADD_FALLBACK: &str = "Something went wrong";
const REMOVE_FAILED: &str = "Removing place failed";

/// An error shown to the user
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorState {
    pub message: String,
}

impl ErrorState {
    /// Use `fallback` when the failure carries no message
    pub fn from_failure(message: &str, fallback: &str) -> Self {
        let message = if message.trim().is_empty() {
            fallback
        } else {
            message
        };

        Self {
            message: message.to_string(),
        }
    }
}

/// State owned by the App container
#[derive(Clone, Copy)]
pub struct PickerState {
    /// The user's saved places
    pub user_places: RwSignal<UserPlaces>,
    /// Initial load of the saved places in flight
    pub loading: RwSignal<bool>,
    /// Removal confirmation dialog visible
    pub modal_open: RwSignal<bool>,
    /// Error shown in the error modal
    pub error: RwSignal<Option<ErrorState>>,
    /// Place the removal dialog acts on; not reactive
    pub selected_place: StoredValue<Option<Place>>,
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            user_places: create_rw_signal(UserPlaces::default()),
            loading: create_rw_signal(false),
            modal_open: create_rw_signal(false),
            error: create_rw_signal(None),
            selected_place: store_value(None),
        }
    }

    /// Saved places as a plain list
    pub fn places(&self) -> Vec<Place> {
        self.user_places.with(|list| list.places().to_vec())
    }

    fn show_error(&self, message: &str, fallback: &str) {
        self.error.set(Some(ErrorState::from_failure(message, fallback)));
    }

    /// Clear the error, closing the error modal
    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    // ============ Initial load ============

    /// Fetch the saved list once
    pub fn load_user_places(self) {
        let seen = self.begin_load();
        spawn_local(async move {
            let result = api::fetch_user_places().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch user places: {}", e).into());
            }
            if !self.finish_load(seen, result) {
                web_sys::console::warn_1(&"Saved list changed while loading; keeping local copy".into());
            }
        });
    }

    /// Mark the load as running; returns the list revision it starts from
    pub fn begin_load(&self) -> u64 {
        self.loading.set(true);
        self.user_places.with_untracked(|list| list.revision())
    }

    /// Take the loaded list unless the local list moved past `seen`
    ///
    /// Returns false when a loaded list was dropped for that reason.
    pub fn finish_load(&self, seen: u64, result: Result<Vec<Place>, String>) -> bool {
        let taken = match result {
            Ok(places) => self
                .user_places
                .try_update(|list| list.load(places, seen))
                .unwrap_or(false),
            Err(message) => {
                self.show_error(&message, LOAD_FALLBACK);
                true
            }
        };
        self.loading.set(false);
        taken
    }

    // ============ Add ============

    /// Add a catalog place and push the new list to the server
    pub fn select_place(self, place: Place) {
        let Some((mutation, body)) = self.begin_add(place) else {
            return;
        };
        spawn_local(async move {
            let result = api::update_user_places(&body, ADD_FAILED).await;
            self.finish_add(&mutation, result);
        });
    }

    /// Prepend the place locally; returns the change and the list to send
    ///
    /// Returns `None` while the saved list is still loading.
    pub fn begin_add(&self, place: Place) -> Option<(Mutation, Vec<Place>)> {
        if self.loading.get_untracked() {
            return None;
        }

        let mutation = self
            .user_places
            .try_update(|list| list.add(place))
            .unwrap_or(Mutation::Unchanged);
        let body = self.user_places.with_untracked(|list| list.to_vec());
        Some((mutation, body))
    }

    pub fn finish_add(&self, mutation: &Mutation, result: Result<(), String>) {
        if let Err(message) = result {
            self.show_error(&message, ADD_FALLBACK);
            self.user_places.update(|list| list.revert(mutation));
        }
    }

    // ============ Remove ============

    /// Open the confirmation dialog for a saved place
    pub fn start_remove(&self, place: Place) {
        self.selected_place.set_value(Some(place));
        self.modal_open.set(true);
    }

    /// Close the confirmation dialog without changing anything
    pub fn stop_remove(&self) {
        self.modal_open.set(false);
    }

    /// Remove the targeted place and push the new list to the server
    pub fn confirm_remove(self) {
        let Some((mutation, body)) = self.begin_remove() else {
            return;
        };

        spawn_local(async move {
            let result = api::update_user_places(&body, REMOVE_FAILED).await;
            self.finish_remove(&mutation, result);
        });
    }

    /// Drop the targeted place locally
    ///
    /// Returns `None` (and closes the dialog) when no place is targeted.
    pub fn begin_remove(&self) -> Option<(Mutation, Vec<Place>)> {
        let target = self
            .selected_place
            .try_update_value(|slot| slot.take())
            .flatten();

        let Some(target) = target else {
            self.modal_open.set(false);
            return None;
        };

        let mutation = self
            .user_places
            .try_update(|list| list.remove(&target.id))
            .unwrap_or(Mutation::Unchanged);
        let body = self.user_places.with_untracked(|list| list.to_vec());
        Some((mutation, body))
    }

    /// Apply the server's answer; the dialog closes either way
    pub fn finish_remove(&self, mutation: &Mutation, result: Result<(), String>) {
        if let Err(message) = result {
            self.show_error(&message, REMOVE_FAILED);
            self.user_places.update(|list| list.revert(mutation));
        }
        self.modal_open.set(false);
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &PickerState) -> Vec<String> {
        state.places().into_iter().map(|p| p.id).collect()
    }

    fn with_state(test: impl FnOnce(PickerState)) {
        let runtime = create_runtime();
        let state = PickerState::new();
        state.user_places.update(|list| {
            list.replace_all(vec![Place::new("a", "Alpha"), Place::new("y", "Yankee")])
        });
        test(state);
        runtime.dispose();
    }

    #[test]
    fn test_error_fallback_message() {
        assert_eq!(ErrorState::from_failure("", "Something went bad").message, "Something went bad");
        assert_eq!(ErrorState::from_failure("Boom", "Something went bad").message, "Boom");
    }

    #[test]
    fn test_add_sends_new_list() {
        with_state(|state| {
            let (mutation, body) = state.begin_add(Place::new("x", "X-ray")).unwrap();

            assert_eq!(mutation, Mutation::Added(Place::new("x", "X-ray")));
            assert_eq!(ids(&state), vec!["x", "a", "y"]);
            let body_ids: Vec<_> = body.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(body_ids, vec!["x", "a", "y"]);

            state.finish_add(&mutation, Ok(()));
            assert_eq!(ids(&state), vec!["x", "a", "y"]);
            assert_eq!(state.error.get_untracked(), None);
        });
    }

    #[test]
    fn test_failed_add_reverts_and_shows_error() {
        with_state(|state| {
            let (mutation, _) = state.begin_add(Place::new("x", "X-ray")).unwrap();
            state.finish_add(&mutation, Err(ADD_FAILED.to_string()));

            assert_eq!(ids(&state), vec!["a", "y"]);
            assert_eq!(
                state.error.get_untracked().map(|e| e.message),
                Some(ADD_FAILED.to_string())
            );
        });
    }

    #[test]
    fn test_re_adding_saved_place_still_syncs_unchanged_list() {
        with_state(|state| {
            let (mutation, body) = state.begin_add(Place::new("a", "Alpha")).unwrap();

            assert_eq!(mutation, Mutation::Unchanged);
            assert_eq!(body.len(), 2);

            state.finish_add(&mutation, Err(String::new()));
            assert_eq!(ids(&state), vec!["a", "y"]);
            assert_eq!(
                state.error.get_untracked().map(|e| e.message),
                Some(ADD_FALLBACK.to_string())
            );
        });
    }

    #[test]
    fn test_cancel_removal() {
        with_state(|state| {
            state.start_remove(Place::new("y", "Yankee"));
            assert!(state.modal_open.get_untracked());

            state.stop_remove();

            assert!(!state.modal_open.get_untracked());
            assert_eq!(ids(&state), vec!["a", "y"]);
        });
    }

    #[test]
    fn test_confirm_removal_success() {
        with_state(|state| {
            state.start_remove(Place::new("y", "Yankee"));
            let (mutation, body) = state.begin_remove().unwrap();

            assert_eq!(body, vec![Place::new("a", "Alpha")]);
            state.finish_remove(&mutation, Ok(()));

            assert_eq!(ids(&state), vec!["a"]);
            assert!(!state.modal_open.get_untracked());
            assert_eq!(state.error.get_untracked(), None);
        });
    }

    #[test]
    fn test_confirm_removal_failure_reverts_and_closes() {
        with_state(|state| {
            state.start_remove(Place::new("y", "Yankee"));
            let (mutation, _) = state.begin_remove().unwrap();
            state.finish_remove(&mutation, Err("Network error: offline".to_string()));

            assert_eq!(ids(&state), vec!["a", "y"]);
            assert!(!state.modal_open.get_untracked());
            assert_eq!(
                state.error.get_untracked().map(|e| e.message),
                Some("Network error: offline".to_string())
            );
        });
    }

    #[test]
    fn test_confirm_without_target_closes_dialog() {
        with_state(|state| {
            state.modal_open.set(true);
            assert!(state.begin_remove().is_none());
            assert!(!state.modal_open.get_untracked());
        });
    }

    #[test]
    fn test_dismissed_error_can_show_again() {
        with_state(|state| {
            let (mutation, _) = state.begin_add(Place::new("x", "X-ray")).unwrap();
            state.finish_add(&mutation, Err("first".to_string()));
            state.dismiss_error();
            assert_eq!(state.error.get_untracked(), None);

            state.start_remove(Place::new("a", "Alpha"));
            let (mutation, _) = state.begin_remove().unwrap();
            state.finish_remove(&mutation, Err("second".to_string()));

            assert_eq!(
                state.error.get_untracked().map(|e| e.message),
                Some("second".to_string())
            );
        });
    }

    #[test]
    fn test_failed_initial_load() {
        with_state(|state| {
            let seen = state.begin_load();
            state.finish_load(seen, Err(String::new()));

            assert!(!state.loading.get_untracked());
            assert_eq!(
                state.error.get_untracked().map(|e| e.message),
                Some(LOAD_FALLBACK.to_string())
            );
        });
    }

    #[test]
    fn test_initial_load_fills_list() {
        let runtime = create_runtime();
        let state = PickerState::new();

        let seen = state.begin_load();
        assert!(state.loading.get_untracked());
        state.finish_load(seen, Ok(vec![Place::new("a", "Alpha"), Place::new("b", "Bravo")]));

        assert_eq!(ids(&state), vec!["a", "b"]);
        assert!(!state.loading.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_selection_ignored_while_loading() {
        let runtime = create_runtime();
        let state = PickerState::new();

        let seen = state.begin_load();
        assert!(state.begin_add(Place::new("x", "X-ray")).is_none());
        assert!(ids(&state).is_empty());

        state.finish_load(seen, Ok(vec![Place::new("a", "Alpha"), Place::new("b", "Bravo")]));
        let (_, body) = state.begin_add(Place::new("x", "X-ray")).unwrap();

        let body_ids: Vec<_> = body.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(body_ids, vec!["x", "a", "b"]);
        runtime.dispose();
    }

    #[test]
    fn test_load_keeps_list_changed_meanwhile() {
        with_state(|state| {
            let seen = state.user_places.with_untracked(|list| list.revision());
            state.start_remove(Place::new("y", "Yankee"));
            let (mutation, _) = state.begin_remove().unwrap();
            state.finish_remove(&mutation, Ok(()));

            let taken =
                state.finish_load(seen, Ok(vec![Place::new("a", "Alpha"), Place::new("y", "Yankee")]));

            assert!(!taken);
            assert_eq!(ids(&state), vec!["a"]);
        });
    }
}

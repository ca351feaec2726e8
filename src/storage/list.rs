//! List operations on place sequences
//!
//! The saved list is ordered newest first and never holds two places with
//! the same id. Every mutation produces a whole new list, which is then
//! sent to the server as a full replacement.

use super::types::Place;

/// Check whether a place with this id is in the list
pub fn contains(places: &[Place], id: &str) -> bool {
    places.iter().any(|p| p.id == id)
}

/// Prepend a place unless its id is already present
///
/// Re-adding a saved place returns the list unchanged.
pub fn with_added(places: &[Place], place: Place) -> Vec<Place> {
    if contains(places, &place.id) {
        return places.to_vec();
    }

    let mut result = Vec::with_capacity(places.len() + 1);
    result.push(place);
    result.extend_from_slice(places);
    result
}

/// Drop every place with this id, keeping the order of the rest
pub fn without(places: &[Place], id: &str) -> Vec<Place> {
    places.iter().filter(|p| p.id != id).cloned().collect()
}

/// Find a place by id
pub fn find<'a>(places: &'a [Place], id: &str) -> Option<&'a Place> {
    places.iter().find(|p| p.id == id)
}

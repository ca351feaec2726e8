//! The user's saved list with optimistic updates
//!
//! Every local change is applied immediately and returns a [`Mutation`]
//! describing it. If the server rejects the change, [`UserPlaces::revert`]
//! applies the inverse of that one mutation to whatever the list looks like
//! now. Reverting a failed add therefore never throws away a different add
//! that succeeded in the meantime.
//!
//! The list also counts its changes. A server snapshot requested at one
//! revision is only taken if nothing changed locally since.

use super::place::Place;

/// A single optimistic change to the saved list
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// The place was prepended
    Added(Place),
    /// The place was removed from `index`, in front of the place `next`
    /// (`None` when it was last)
    Removed {
        place: Place,
        index: usize,
        next: Option<String>,
    },
    /// Nothing changed (already saved / not present)
    Unchanged,
}

/// Saved places, newest first, unique by id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPlaces {
    places: Vec<Place>,
    revision: u64,
}

impl UserPlaces {
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Bumped on every change, including reverts
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contains(&self, id: &str) -> bool {
        self.places.iter().any(|p| p.id == id)
    }

    /// The list as it should be sent to the server
    pub fn to_vec(&self) -> Vec<Place> {
        self.places.clone()
    }

    /// Take the list loaded from the server
    pub fn replace_all(&mut self, places: Vec<Place>) {
        self.places = places;
        self.revision += 1;
    }

    /// Take a server snapshot requested at revision `seen`
    ///
    /// Returns false (and keeps the local list) if the list changed since.
    pub fn load(&mut self, places: Vec<Place>, seen: u64) -> bool {
        if self.revision != seen {
            return false;
        }
        self.replace_all(places);
        true
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.places.iter().position(|p| p.id == id)
    }

    /// Prepend a place unless it is already saved
    pub fn add(&mut self, place: Place) -> Mutation {
        if self.contains(&place.id) {
            return Mutation::Unchanged;
        }

        self.places.insert(0, place.clone());
        self.revision += 1;
        Mutation::Added(place)
    }

    /// Remove a place by id
    pub fn remove(&mut self, id: &str) -> Mutation {
        let Some(index) = self.position(id) else {
            return Mutation::Unchanged;
        };

        let place = self.places.remove(index);
        let next = self.places.get(index).map(|p| p.id.clone());
        self.revision += 1;
        Mutation::Removed { place, index, next }
    }

    /// Undo one mutation against the current list
    pub fn revert(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::Added(place) => {
                let before = self.places.len();
                self.places.retain(|p| p.id != place.id);
                if self.places.len() != before {
                    self.revision += 1;
                }
            }
            Mutation::Removed { place, index, next } => {
                if self.contains(&place.id) {
                    return;
                }
                // Back in front of its old successor; the old index only
                // when that successor is gone too
                let index = match next {
                    Some(next) => self
                        .position(next)
                        .unwrap_or_else(|| (*index).min(self.places.len())),
                    None => self.places.len(),
                };
                self.places.insert(index, place.clone());
                self.revision += 1;
            }
            Mutation::Unchanged => {}
        }
    }
}

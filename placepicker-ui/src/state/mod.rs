//! State Management
//!
//! Place types, the optimistic saved list and the App container's signals.

pub mod fetch;
pub mod global;
pub mod place;
pub mod user_places;

pub use fetch::FetchState;
pub use global::{PickerState, ERROR_TITLE};
pub use place::Place;

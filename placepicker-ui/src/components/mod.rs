//! UI Components
//!
//! Leptos components for the place picker.

pub mod available_places;
pub mod delete_confirmation;
pub mod error_page;
pub mod modal;
pub mod places;

pub use available_places::AvailablePlaces;
pub use delete_confirmation::DeleteConfirmation;
pub use error_page::ErrorPage;
pub use modal::{provide_modal_layers, Modal};
pub use places::Places;

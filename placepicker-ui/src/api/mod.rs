//! API Access
//!
//! HTTP calls to the PlacePicker backend.

pub mod client;

pub use client::{fetch_available_places, fetch_user_places, get_api_base, update_user_places};

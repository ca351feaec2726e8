//! PlacePicker
//!
//! Pick places from a catalog and keep a personal list of places to visit,
//! built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the PlacePicker API over HTTP and updates the
//! saved list optimistically, rolling back single changes the server
//! rejects.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

//! HTTP API Client
//!
//! Functions for communicating with the PlacePicker REST API. Every call
//! resolves to `Result<_, String>` where the error is the message shown to
//! the user.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::state::place::Place;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "placepicker_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref())
}

fn normalize_base(stored: Option<&str>) -> String {
    let url = match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE,
    };
    url.trim_end_matches('/').to_string()
}

/// Message for a non-success status, `None` for 2xx
///
/// Response bodies of failed requests are not inspected.
fn status_failure(status: u16, failure_message: &str) -> Option<String> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(failure_message.to_string())
    }
}

const CATALOG_FAILED: &str = "Could not fetch places";
const USER_PLACES_FAILED: &str = "Could not fetch user places";

// ============ Wire Types ============

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    places: Vec<Place>,
}

#[derive(Serialize)]
struct ReplaceRequest<'a> {
    places: &'a [Place],
}

// ============ API Functions ============

/// Fetch the catalog of available places
pub async fn fetch_available_places() -> Result<Vec<Place>, String> {
    fetch_list("places", CATALOG_FAILED).await
}

/// Fetch the user's saved places
pub async fn fetch_user_places() -> Result<Vec<Place>, String> {
    fetch_list("user-places", USER_PLACES_FAILED).await
}

async fn fetch_list(path: &str, failure_message: &str) -> Result<Vec<Place>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/{}", api_base, path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if let Some(message) = status_failure(response.status(), failure_message) {
        return Err(message);
    }

    let result: PlacesResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.places)
}

/// Replace the user's saved list with `places`
///
/// The response body is not used; only the status decides success.
/// `failure_message` is returned for a non-success status.
pub async fn update_user_places(places: &[Place], failure_message: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/user-places", api_base))
        .json(&ReplaceRequest { places })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if let Some(message) = status_failure(response.status(), failure_message) {
        return Err(message);
    }

    Ok(())
}

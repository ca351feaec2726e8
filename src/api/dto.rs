//! Data Transfer Objects
//!
//! Request and response types for the API endpoints. The same types are
//! used by [`crate::client::PlacesClient`] on the other side of the wire.

use serde::{Deserialize, Serialize};

use crate::storage::Place;

/// GET /places response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

/// GET /user-places response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlacesResponse {
    pub places: Vec<Place>,
    /// Edit counter of the saved list
    #[serde(default)]
    pub version: u64,
}

/// PUT /user-places request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceUserPlacesRequest {
    /// The complete new list
    pub places: Vec<Place>,
    /// Only replace if the list is still at this version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

/// PUT /user-places response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceUserPlacesResponse {
    pub message: String,
    pub places: Vec<Place>,
    pub version: u64,
}

/// GET /health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalog_places: usize,
    pub user_places: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

//! Catalog Routes
//!
//! - GET /places - List every place that can be picked

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::PlacesResponse;
use crate::api::state::AppState;

/// GET /places
pub async fn list_places(State(state): State<Arc<AppState>>) -> Json<PlacesResponse> {
    Json(PlacesResponse {
        places: state.store.catalog().to_vec(),
    })
}

//! Saved List Routes
//!
//! - GET /user-places - The user's saved places, newest first
//! - PUT /user-places - Replace the whole saved list
//!
//! There are no incremental endpoints: clients compute the new list and
//! send all of it.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ReplaceUserPlacesRequest, ReplaceUserPlacesResponse, UserPlacesResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /user-places
pub async fn get_user_places(State(state): State<Arc<AppState>>) -> Json<UserPlacesResponse> {
    let user = state.store.user_places().await;

    Json(UserPlacesResponse {
        places: user.places,
        version: user.version,
    })
}

/// PUT /user-places
///
/// Body: `{ "places": [...], "version"?: n }`. A stale `version` is
/// answered with 409 and leaves the list untouched.
pub async fn replace_user_places(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReplaceUserPlacesRequest>, JsonRejection>,
) -> ApiResult<Json<ReplaceUserPlacesResponse>> {
    let Json(req) = payload?;
    let count = req.places.len();

    let version = state
        .store
        .replace_user_places(req.places.clone(), req.version)
        .await?;

    tracing::info!(count, version, "User places updated");

    Ok(Json(ReplaceUserPlacesResponse {
        message: "User places updated!".to_string(),
        places: req.places,
        version,
    }))
}

//! PlacePicker REST API
//!
//! HTTP API layer for PlacePicker, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /places` - Catalog of places
//! - `GET /user-places` - The user's saved list
//! - `PUT /user-places` - Replace the saved list
//! - `GET /health` - Service status
//! - `GET /images/*` - Place images (when an images directory is configured)
//!
//! Anything else answers 404 with `{ "message": "404 - Not Found" }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use placepicker::api::{serve, ApiConfig, AppState};
//! use placepicker::storage::{PlaceStore, StorageConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(PlaceStore::open(StorageConfig::default()).await?);
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    let images_dir = state.config.images_dir.clone();

    let mut router = Router::new()
        .route("/places", get(routes::places::list_places))
        .route(
            "/user-places",
            get(routes::user_places::get_user_places).put(routes::user_places::replace_user_places),
        )
        .route("/health", get(routes::health::health));

    if let Some(dir) = images_dir.filter(|dir| dir.is_dir()) {
        tracing::info!("Serving images from {:?}", dir);
        router = router.nest_service("/images", ServeDir::new(dir));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("PlacePicker API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("PlacePicker API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{PlaceStore, StorageConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    async fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = Arc::new(PlaceStore::open(StorageConfig::new(dir.path())).await.unwrap());
        let router = build_router(AppState::new(store, ApiConfig::default()));

        (router, dir)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn put_user_places(body: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/user-places")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_places() {
        let (app, _dir) = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/places").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(!json["places"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_places_empty() {
        let (app, _dir) = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/user-places").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["places"], serde_json::json!([]));
        assert_eq!(json["version"], 0);
    }

    #[tokio::test]
    async fn test_replace_then_read_back() {
        let (app, _dir) = create_test_app().await;

        let response = app
            .clone()
            .oneshot(put_user_places(
                r#"{"places":[{"id":"x","title":"X-ray","lat":1.0},{"id":"a","title":"Alpha"}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["version"], 1);

        let response = app
            .oneshot(Request::builder().uri("/user-places").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;

        assert_eq!(json["places"][0]["id"], "x");
        assert_eq!(json["places"][0]["lat"], 1.0);
        assert_eq!(json["places"][1]["id"], "a");
    }

    #[tokio::test]
    async fn test_replace_with_stale_version() {
        let (app, _dir) = create_test_app().await;

        let response = app
            .clone()
            .oneshot(put_user_places(r#"{"places":[],"version":0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(put_user_places(r#"{"places":[{"id":"a","title":"Alpha"}],"version":0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["code"], "VERSION_CONFLICT");
    }

    #[tokio::test]
    async fn test_replace_invalid_json() {
        let (app, _dir) = create_test_app().await;

        let response = app.oneshot(put_user_places("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_replace_missing_places_field() {
        let (app, _dir) = create_test_app().await;

        let response = app.oneshot(put_user_places(r#"{"items":[]}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _dir) = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "404 - Not Found");
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_serves_images_when_configured() {
        let data = tempdir().unwrap();
        let images = tempdir().unwrap();
        std::fs::write(images.path().join("forest.jpg"), b"jpeg").unwrap();

        let store = Arc::new(PlaceStore::open(StorageConfig::new(data.path())).await.unwrap());
        let config = ApiConfig {
            images_dir: Some(images.path().to_path_buf()),
            ..Default::default()
        };
        let app = build_router(AppState::new(store, config));

        let response = app
            .oneshot(Request::builder().uri("/images/forest.jpg").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

//! PlacePicker API Server
//!
//! Run with: cargo run --bin placepicker-api
//!
//! # Configuration
//!
//! Read from `PLACEPICKER_CONFIG` if set, otherwise from the default
//! config locations (see [`placepicker::config`]). Environment variables:
//! - `PLACEPICKER_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PLACEPICKER_PORT`: Port to listen on (default: 3000)
//! - `PLACEPICKER_DATA_DIR`: Data directory
//! - `PLACEPICKER_IMAGES_DIR`: Image directory served under /images
//! - `RUST_LOG`: Log filter (default: placepicker=info,tower_http=debug)

use placepicker::api::{serve, ApiConfig, AppState};
use placepicker::config::Config;
use placepicker::storage::{PlaceStore, StorageConfig};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = match std::env::var("PLACEPICKER_CONFIG") {
        Ok(path) => {
            let path = PathBuf::from(path);
            (Config::load_with_env(&path)?, Some(path))
        }
        Err(_) => Config::load_default(),
    };

    config.logging.init();

    tracing::info!("Starting PlacePicker API server v{}", env!("CARGO_PKG_VERSION"));
    match source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    let storage_config = StorageConfig::new(config.storage.data_path());
    tracing::info!("Data directory: {:?}", storage_config.data_dir);

    let store = Arc::new(PlaceStore::open(storage_config).await?);
    tracing::info!("Store stats: {}", store.stats().await);

    let api_config = ApiConfig::from(&config);
    let state = AppState::new(store, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("PlacePicker API server stopped");
    Ok(())
}

//! # PlacePicker
//!
//! Collect the places you would like to visit. A full-stack Rust
//! application: this crate is the REST backend plus a command-line client;
//! the browser UI lives in `placepicker-ui`.
//!
//! ## Modules
//!
//! - [`storage`]: Place types, saved-list operations and the file-backed store
//! - [`api`]: REST API server with Axum
//! - [`client`]: HTTP client for the REST API
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use placepicker::api::{serve, ApiConfig, AppState};
//! use placepicker::storage::{PlaceStore, StorageConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(PlaceStore::open(StorageConfig::new("./data")).await?);
//!     println!("{} places in the catalog", store.catalog().len());
//!
//!     let config = ApiConfig::default();
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod storage;

pub use storage::{Place, PlaceImage, PlaceStore, StorageConfig, StorageError, StorageResult};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use client::{ClientConfig, ClientError, PlacesClient};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};

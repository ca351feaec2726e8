//! PlacePicker Storage
//!
//! - **types**: Core data structures (Place, PlaceImage)
//! - **list**: Saved-list operations (idempotent add, remove by id)
//! - **store**: File-backed catalog and saved list
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use placepicker::storage::{list, PlaceStore, StorageConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PlaceStore::open(StorageConfig::new("./data")).await?;
//!
//!     let first = store.catalog()[0].clone();
//!     let saved = store.user_places().await;
//!     let updated = list::with_added(&saved.places, first);
//!
//!     store.replace_user_places(updated, Some(saved.version)).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod list;
pub mod store;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use store::{PlaceStore, StorageConfig, StoreStats, UserPlaces};
pub use types::{Place, PlaceImage};

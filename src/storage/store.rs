//! PlaceStore
//!
//! File-backed storage for the place catalog and the user's saved list.
//! Both documents are JSON arrays of places under the data directory:
//!
//! ```text
//! data_dir/
//!   places.json        catalog (seeded on first start)
//!   user-places.json   saved list, replaced wholesale on every write
//! ```
//!
//! The saved list carries an in-memory edit counter. Writers may pass the
//! version they read to detect that someone else replaced the list in the
//! meantime; writers that pass nothing get last-write-wins.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::Place;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Catalog written to `places.json` when the data directory is new
const DEFAULT_CATALOG: &str = include_str!("../../data/places.json");

/// Configuration for the place store
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for all data
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("placepicker_data"),
        }
    }
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get path to the catalog file
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("places.json")
    }

    /// Get path to the saved list file
    pub fn user_places_path(&self) -> PathBuf {
        self.data_dir.join("user-places.json")
    }
}

/// Snapshot of the saved list
#[derive(Debug, Clone, PartialEq)]
pub struct UserPlaces {
    pub places: Vec<Place>,
    /// Bumped on every successful replace; starts at 0 per process
    pub version: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub catalog_places: usize,
    pub user_places: usize,
    pub version: u64,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "catalog={} saved={} version={}",
            self.catalog_places, self.user_places, self.version
        )
    }
}

/// Storage for catalog and saved list
pub struct PlaceStore {
    config: StorageConfig,
    catalog: Vec<Place>,
    user: RwLock<UserPlaces>,
}

impl PlaceStore {
    /// Open the store, creating and seeding the data directory if needed
    pub async fn open(config: StorageConfig) -> StorageResult<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let catalog_path = config.catalog_path();
        if !tokio::fs::try_exists(&catalog_path).await? {
            tracing::info!(path = ?catalog_path, "Seeding place catalog");
            tokio::fs::write(&catalog_path, DEFAULT_CATALOG).await?;
        }

        let user_path = config.user_places_path();
        if !tokio::fs::try_exists(&user_path).await? {
            tokio::fs::write(&user_path, "[]").await?;
        }

        let catalog = read_places(&catalog_path).await?;
        let places = read_places(&user_path).await?;

        tracing::info!(
            catalog = catalog.len(),
            saved = places.len(),
            "Place store opened"
        );

        Ok(Self {
            config,
            catalog,
            user: RwLock::new(UserPlaces {
                places,
                version: 0,
                updated_at: None,
            }),
        })
    }

    /// All places available to pick from
    pub fn catalog(&self) -> &[Place] {
        &self.catalog
    }

    /// Current saved list
    pub async fn user_places(&self) -> UserPlaces {
        self.user.read().await.clone()
    }

    /// Replace the saved list
    ///
    /// When `expected_version` is given it must match the current version,
    /// otherwise nothing is written. Returns the new version.
    pub async fn replace_user_places(
        &self,
        places: Vec<Place>,
        expected_version: Option<u64>,
    ) -> StorageResult<u64> {
        let mut user = self.user.write().await;

        if let Some(expected) = expected_version {
            if expected != user.version {
                return Err(StorageError::VersionConflict {
                    expected,
                    current: user.version,
                });
            }
        }

        write_places(&self.config.user_places_path(), &places).await?;

        user.places = places;
        user.version += 1;
        user.updated_at = Some(Utc::now());

        tracing::debug!(count = user.places.len(), version = user.version, "Saved list replaced");
        Ok(user.version)
    }

    /// Store statistics
    pub async fn stats(&self) -> StoreStats {
        let user = self.user.read().await;
        StoreStats {
            catalog_places: self.catalog.len(),
            user_places: user.places.len(),
            version: user.version,
        }
    }
}

async fn read_places(path: &Path) -> StorageResult<Vec<Place>> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|e| StorageError::InvalidData {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write via a temp file and rename so readers never see a partial file
async fn write_places(path: &Path, places: &[Place]) -> StorageResult<()> {
    let content = serde_json::to_string_pretty(places)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, content).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn create_test_store() -> (PlaceStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = PlaceStore::open(StorageConfig::new(dir.path())).await.unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_open_seeds_catalog() {
        let (store, dir) = create_test_store().await;

        assert!(!store.catalog().is_empty());
        assert!(dir.path().join("places.json").exists());
        assert!(store.user_places().await.places.is_empty());
    }

    #[tokio::test]
    async fn test_seed_catalog_has_unique_ids() {
        let (store, _dir) = create_test_store().await;
        let catalog = store.catalog();

        for (i, place) in catalog.iter().enumerate() {
            assert!(
                catalog[i + 1..].iter().all(|other| other.id != place.id),
                "duplicate id {}",
                place.id
            );
        }
    }

    #[tokio::test]
    async fn test_replace_bumps_version() {
        let (store, _dir) = create_test_store().await;

        let v1 = store
            .replace_user_places(vec![Place::new("a", "Alpha")], None)
            .await
            .unwrap();
        let v2 = store
            .replace_user_places(vec![Place::new("b", "Bravo")], None)
            .await
            .unwrap();

        assert_eq!(v1, 1);
        assert_eq!(v2, 2);

        let user = store.user_places().await;
        assert_eq!(user.places, vec![Place::new("b", "Bravo")]);
        assert!(user.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_stale_version_is_rejected() {
        let (store, _dir) = create_test_store().await;

        store
            .replace_user_places(vec![Place::new("a", "Alpha")], Some(0))
            .await
            .unwrap();

        let result = store
            .replace_user_places(vec![Place::new("b", "Bravo")], Some(0))
            .await;

        assert!(matches!(
            result,
            Err(StorageError::VersionConflict {
                expected: 0,
                current: 1
            })
        ));
        assert_eq!(store.user_places().await.places[0].id, "a");
    }

    #[tokio::test]
    async fn test_persistence() {
        let dir = tempdir().unwrap();

        {
            let store = PlaceStore::open(StorageConfig::new(dir.path())).await.unwrap();
            store
                .replace_user_places(vec![Place::new("x", "X-ray").field("lat", 1.5)], None)
                .await
                .unwrap();
        }

        let store = PlaceStore::open(StorageConfig::new(dir.path())).await.unwrap();
        let user = store.user_places().await;

        assert_eq!(user.places.len(), 1);
        assert_eq!(user.places[0].extra.get("lat"), Some(&serde_json::Value::from(1.5)));
        assert_eq!(user.version, 0);
        assert!(!dir.path().join("user-places.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_invalid_data_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("user-places.json"), "not json").unwrap();

        let result = PlaceStore::open(StorageConfig::new(dir.path())).await;
        assert!(matches!(result, Err(StorageError::InvalidData { .. })));
    }

    #[tokio::test]
    async fn test_stats() {
        let (store, _dir) = create_test_store().await;
        let stats = store.stats().await;

        assert_eq!(stats.user_places, 0);
        assert_eq!(stats.version, 0);
        assert_eq!(stats.catalog_places, store.catalog().len());
    }
}

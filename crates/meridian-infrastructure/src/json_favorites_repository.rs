//! Favorite list repository backed by a single JSON document.
//!
//! File location: `<config_dir>/meridian/favorites.json`, a bare JSON array
//! of zone identifier strings.

use std::path::{Path, PathBuf};

use tracing::debug;

use meridian_core::error::{MeridianError, Result};
use meridian_core::favorites::{FavoriteSet, FavoritesRepository};

use crate::paths::MeridianPaths;
use crate::storage;

/// File-based favorites repository.
pub struct JsonFavoritesRepository {
    path: PathBuf,
}

impl JsonFavoritesRepository {
    const FILENAME: &'static str = "favorites.json";

    /// Creates a repository at the default platform location.
    pub fn new() -> Result<Self> {
        let dir = MeridianPaths::config_dir().map_err(|e| MeridianError::io(e.to_string()))?;
        Ok(Self {
            path: dir.join(Self::FILENAME),
        })
    }

    /// Creates a repository rooted at a custom directory (for testing).
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(Self::FILENAME),
        }
    }

    /// The document path this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesRepository for JsonFavoritesRepository {
    fn load(&self) -> FavoriteSet {
        // Normalize through the model so a hand-edited document with
        // duplicates still satisfies the no-duplicates invariant.
        let zone_ids: Vec<String> = storage::read_json_or_default(&self.path);
        FavoriteSet::from_zone_ids(zone_ids)
    }

    fn save(&self, favorites: &FavoriteSet) -> Result<()> {
        storage::write_json_atomic(&self.path, favorites)?;
        debug!(path = %self.path.display(), count = favorites.len(), "favorites saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_empty_when_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFavoritesRepository::with_base_dir(temp_dir.path());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFavoritesRepository::with_base_dir(temp_dir.path());
        assert_eq!(repo.load(), repo.load());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFavoritesRepository::with_base_dir(temp_dir.path());

        let favorites = FavoriteSet::from_zone_ids(vec![
            "Europe/Madrid".to_string(),
            "Asia/Seoul".to_string(),
        ]);
        repo.save(&favorites).unwrap();

        assert_eq!(repo.load(), favorites);
    }

    #[test]
    fn test_document_is_a_bare_string_array() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFavoritesRepository::with_base_dir(temp_dir.path());

        let favorites = FavoriteSet::from_zone_ids(vec!["Europe/Madrid".to_string()]);
        repo.save(&favorites).unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, vec!["Europe/Madrid".to_string()]);
    }

    #[test]
    fn test_corrupt_document_recovers_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFavoritesRepository::with_base_dir(temp_dir.path());

        fs::write(repo.path(), "{\"oops\": true}").unwrap();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_hand_edited_duplicates_are_dropped_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFavoritesRepository::with_base_dir(temp_dir.path());

        fs::write(
            repo.path(),
            r#"["Europe/Madrid", "Asia/Seoul", "Europe/Madrid"]"#,
        )
        .unwrap();

        let loaded = repo.load();
        assert_eq!(
            loaded.iter().collect::<Vec<_>>(),
            vec!["Europe/Madrid", "Asia/Seoul"]
        );
    }
}

//! Conversion history repository backed by a single JSON document.
//!
//! File location: `<config_dir>/meridian/history.json`, a bare JSON array of
//! record objects with keys `timestamp`, `from_zone`, `to_zone`, `from_time`,
//! `to_time`.

use std::path::{Path, PathBuf};

use tracing::debug;

use meridian_core::error::{MeridianError, Result};
use meridian_core::history::{HistoryLedger, HistoryRepository};

use crate::paths::MeridianPaths;
use crate::storage;

/// File-based history repository.
pub struct JsonHistoryRepository {
    path: PathBuf,
}

impl JsonHistoryRepository {
    const FILENAME: &'static str = "history.json";

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

impl HistoryRepository for JsonHistoryRepository {
    fn load(&self) -> HistoryLedger {
        storage::read_json_or_default(&self.path)
    }

    fn save(&self, history: &HistoryLedger) -> Result<()> {
        storage::write_json_atomic(&self.path, history)?;
        debug!(path = %self.path.display(), count = history.len(), "history saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonFavoritesRepository;
    use meridian_core::favorites::{FavoriteSet, FavoritesRepository};
    use meridian_core::history::ConversionRecord;
    use std::fs;
    use tempfile::TempDir;

    fn sample_record() -> ConversionRecord {
        ConversionRecord {
            timestamp: "2024-05-01 10:00:00".to_string(),
            from_zone: "Asia/Tokyo".to_string(),
            to_zone: "UTC".to_string(),
            from_time: "2024-05-01 09:00:00".to_string(),
            to_time: "2024-05-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_load_empty_when_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::with_base_dir(temp_dir.path());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::with_base_dir(temp_dir.path());

        let mut ledger = HistoryLedger::new();
        let mut second = sample_record();
        second.timestamp = "2024-05-02 10:00:00".to_string();
        ledger.append(sample_record());
        ledger.append(second);

        repo.save(&ledger).unwrap();
        let loaded = repo.load();
        assert_eq!(loaded, ledger);
        assert_eq!(loaded.records()[0].timestamp, "2024-05-01 10:00:00");
    }

    #[test]
    fn test_document_keys_match_contract() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::with_base_dir(temp_dir.path());

        let mut ledger = HistoryLedger::new();
        ledger.append(sample_record());
        repo.save(&ledger).unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let entry = &parsed[0];
        for key in ["timestamp", "from_zone", "to_zone", "from_time", "to_time"] {
            assert!(entry.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_empty_ledger_persists_as_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::with_base_dir(temp_dir.path());

        repo.save(&HistoryLedger::new()).unwrap();
        let content = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn test_corrupt_document_recovers_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::with_base_dir(temp_dir.path());

        fs::write(repo.path(), "[{]").unwrap();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_corrupt_history_cannot_affect_favorites() {
        let temp_dir = TempDir::new().unwrap();
        let history_repo = JsonHistoryRepository::with_base_dir(temp_dir.path());
        let favorites_repo = JsonFavoritesRepository::with_base_dir(temp_dir.path());

        favorites_repo
            .save(&FavoriteSet::from_zone_ids(vec!["Europe/Madrid".to_string()]))
            .unwrap();
        fs::write(history_repo.path(), "garbage").unwrap();

        assert!(history_repo.load().is_empty());
        assert_eq!(favorites_repo.load().len(), 1);
    }
}

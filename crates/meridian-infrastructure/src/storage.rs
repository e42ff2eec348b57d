//! Shared JSON document helpers for the file repositories.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use meridian_core::error::{MeridianError, Result};

/// Reads a JSON document, falling back to `T::default()` when the file is
/// missing, unreadable, or does not parse.
///
/// Missing files are the normal first-run case and stay silent; anything
/// else that forces the fallback is logged at `warn`, never surfaced.
pub fn read_json_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return T::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "document unreadable, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "document corrupt, starting empty");
            T::default()
        }
    }
}

/// Serializes `value` and replaces the document at `path` in one step.
///
/// The payload is written to a sibling temp file and renamed over the
/// target, so a failed or interrupted write cannot leave a truncated
/// document behind a successful call.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| MeridianError::io(format!("failed to create {}: {}", parent.display(), e)))?;
    }

    let payload = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    fs::write(&tmp, payload)
        .map_err(|e| MeridianError::io(format!("failed to write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path)
        .map_err(|e| MeridianError::io(format!("failed to replace {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Vec<String> = read_json_or_default(&temp_dir.path().join("absent.json"));
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupt_file_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "{not json").unwrap();

        let loaded: Vec<String> = read_json_or_default(&path);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/doc.json");
        let value = vec!["Europe/Madrid".to_string()];

        write_json_atomic(&path, &value).unwrap();
        let loaded: Vec<String> = read_json_or_default(&path);
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        write_json_atomic(&path, &vec!["UTC".to_string()]).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["doc.json"]);
    }
}

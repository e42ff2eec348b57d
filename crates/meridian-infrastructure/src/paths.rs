//! Unified path management for Meridian's persisted documents.
//!
//! Favorites and history live as two independent JSON files under the
//! platform config directory, so corruption of one can never affect the
//! other.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Meridian.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/meridian/          # Config directory (XDG on Linux/macOS)
/// ├── favorites.json           # Favorite zone identifiers
/// └── history.json             # Conversion history
/// ```
pub struct MeridianPaths;

impl MeridianPaths {
    /// Returns the Meridian configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/meridian/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("meridian"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the favorites document.
    pub fn favorites_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("favorites.json"))
    }

    /// Returns the path to the history document.
    pub fn history_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("history.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = MeridianPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("meridian"));
    }

    #[test]
    fn test_document_files_live_under_config_dir() {
        let config_dir = MeridianPaths::config_dir().unwrap();

        let favorites = MeridianPaths::favorites_file().unwrap();
        assert!(favorites.ends_with("favorites.json"));
        assert!(favorites.starts_with(&config_dir));

        let history = MeridianPaths::history_file().unwrap();
        assert!(history.ends_with("history.json"));
        assert!(history.starts_with(&config_dir));
    }
}

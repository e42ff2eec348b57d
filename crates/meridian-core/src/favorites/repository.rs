//! Favorite list persistence trait.

use super::model::FavoriteSet;
use crate::error::Result;

/// Repository for the favorite zone list.
///
/// Loading is best-effort: a missing, unreadable, or corrupt document yields
/// the empty list rather than an error, so the engine always starts. Saving
/// must replace the document atomically and report failures to the caller,
/// because a lost user edit has to be visible.
pub trait FavoritesRepository {
    /// Loads the favorite list, or the empty list when nothing usable is
    /// stored.
    fn load(&self) -> FavoriteSet;

    /// Persists the full favorite list, replacing the previous document.
    fn save(&self, favorites: &FavoriteSet) -> Result<()>;
}

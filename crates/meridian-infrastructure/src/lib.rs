//! File-backed persistence for the Meridian engine.
//!
//! Implements the repository traits from `meridian-core` against two
//! independent JSON documents under the platform config directory, with
//! atomic replacement on save and silent recovery to empty on load.

pub mod json_favorites_repository;
pub mod json_history_repository;
pub mod paths;
pub mod storage;

pub use json_favorites_repository::JsonFavoritesRepository;
pub use json_history_repository::JsonHistoryRepository;

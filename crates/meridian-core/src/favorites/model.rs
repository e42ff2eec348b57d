//! Favorite zone list domain model.

use serde::{Deserialize, Serialize};

/// Ordered list of favorite zone identifiers.
///
/// Order is insertion order and doubles as display order; duplicates are
/// rejected at insertion. Serializes as a bare JSON array of strings, which
/// is exactly the shape of the persisted favorites document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    zone_ids: Vec<String>,
}

impl FavoriteSet {
    /// Creates an empty favorite list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a favorite list from raw identifiers, dropping duplicates while
    /// keeping first-occurrence order. Used when loading a document that may
    /// have been edited by hand.
    pub fn from_zone_ids(zone_ids: Vec<String>) -> Self {
        let mut set = Self::new();
        for zone_id in zone_ids {
            set.add(zone_id);
        }
        set
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.zone_ids.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.zone_ids.is_empty()
    }

    /// Whether `zone_id` is already in the list.
    pub fn contains(&self, zone_id: &str) -> bool {
        self.zone_ids.iter().any(|known| known == zone_id)
    }

    /// Appends `zone_id` to the end of the list.
    ///
    /// Returns `false` (without mutating) if the identifier is already
    /// present.
    pub fn add(&mut self, zone_id: impl Into<String>) -> bool {
        let zone_id = zone_id.into();
        if self.contains(&zone_id) {
            return false;
        }
        self.zone_ids.push(zone_id);
        true
    }

    /// Removes `zone_id` from the list, keeping the order of the rest.
    ///
    /// Returns `false` if the identifier was not present.
    pub fn remove(&mut self, zone_id: &str) -> bool {
        match self.zone_ids.iter().position(|known| known == zone_id) {
            Some(index) => {
                self.zone_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Iterates the identifiers in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zone_ids.iter().map(String::as_str)
    }

    /// The identifiers as a slice, in stored order.
    pub fn as_slice(&self) -> &[String] {
        &self.zone_ids
    }
}

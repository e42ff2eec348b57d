//! Time zone catalog.
//!
//! Read-only registry of the zone identifiers the bundled IANA database
//! knows, plus the fixed city list shown before any user favorites. Every
//! boundary that accepts a zone identifier resolves it here, so invalid
//! identifiers never travel further into the engine.

use std::str::FromStr;

use chrono_tz::{TZ_VARIANTS, Tz};
use serde::{Deserialize, Serialize};

use crate::error::{MeridianError, Result};

/// Label used for world-clock rows that come from the favorite list rather
/// than the default city table.
pub const FAVORITE_LABEL: &str = "Custom";

/// Default cities and their zones, in display order.
pub const DEFAULT_CITIES: [(&str, &str); 10] = [
    ("New York", "America/New_York"),
    ("London", "Europe/London"),
    ("Paris", "Europe/Paris"),
    ("Tokyo", "Asia/Tokyo"),
    ("Sydney", "Australia/Sydney"),
    ("Dubai", "Asia/Dubai"),
    ("Los Angeles", "America/Los_Angeles"),
    ("Singapore", "Asia/Singapore"),
    ("Hong Kong", "Asia/Hong_Kong"),
    ("Berlin", "Europe/Berlin"),
];

/// A named point of interest bound to a canonical IANA zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRef {
    /// Human-readable label (typically a city name)
    pub label: String,
    /// Canonical zone identifier, e.g. "Europe/Paris"
    pub zone_id: String,
}

impl ZoneRef {
    /// Creates a new ZoneRef.
    pub fn new(label: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            zone_id: zone_id.into(),
        }
    }
}

/// Registry of every zone identifier in the bundled database.
///
/// The database ships with the binary (chrono-tz), so catalog construction
/// cannot fail and lookups never touch the network or the host system.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    zone_ids: Vec<String>,
}

impl ZoneCatalog {
    /// Builds the catalog from the bundled database, sorted by identifier.
    pub fn new() -> Self {
        let mut zone_ids: Vec<String> = TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect();
        zone_ids.sort_unstable();
        Self { zone_ids }
    }

    /// All known zone identifiers, sorted.
    pub fn zone_ids(&self) -> &[String] {
        &self.zone_ids
    }

    /// Whether `zone_id` is a known identifier.
    pub fn contains(&self, zone_id: &str) -> bool {
        self.zone_ids
            .binary_search_by(|known| known.as_str().cmp(zone_id))
            .is_ok()
    }

    /// The fixed city list shown before any favorites, in display order.
    pub fn default_cities() -> Vec<ZoneRef> {
        DEFAULT_CITIES
            .iter()
            .map(|(label, zone_id)| ZoneRef::new(*label, *zone_id))
            .collect()
    }

    /// Resolves an identifier against the bundled database.
    ///
    /// # Returns
    ///
    /// - `Ok(Tz)`: the zone is known
    /// - `Err(UnknownZone)`: the identifier is not in the database
    pub fn resolve(zone_id: &str) -> Result<Tz> {
        Tz::from_str(zone_id).map_err(|_| MeridianError::unknown_zone(zone_id))
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_ids_are_sorted_and_nonempty() {
        let catalog = ZoneCatalog::new();
        let ids = catalog.zone_ids();
        assert!(!ids.is_empty());
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_contains_known_zone() {
        let catalog = ZoneCatalog::new();
        assert!(catalog.contains("Europe/Madrid"));
        assert!(catalog.contains("UTC"));
        assert!(!catalog.contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn test_default_cities_order() {
        let cities = ZoneCatalog::default_cities();
        assert_eq!(cities.len(), 10);
        assert_eq!(cities[0], ZoneRef::new("New York", "America/New_York"));
        assert_eq!(cities[9], ZoneRef::new("Berlin", "Europe/Berlin"));
    }

    #[test]
    fn test_default_cities_all_resolve() {
        let catalog = ZoneCatalog::new();
        for city in ZoneCatalog::default_cities() {
            assert!(catalog.contains(&city.zone_id), "{}", city.zone_id);
            assert!(ZoneCatalog::resolve(&city.zone_id).is_ok());
        }
    }

    #[test]
    fn test_resolve_unknown_zone() {
        let err = ZoneCatalog::resolve("Atlantis/Lost_City").unwrap_err();
        assert!(err.is_unknown_zone());
    }
}

//! World-clock aggregation.
//!
//! Produces one display row per tracked zone at a given instant: the default
//! city list first, then the favorites. Rows are ephemeral; each call stands
//! alone, so a timer can drive this every second without accumulating state.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::catalog::{FAVORITE_LABEL, ZoneCatalog, ZoneRef};
use crate::convert::TIME_FORMAT;
use crate::favorites::FavoriteSet;

/// A single world-clock display row. Recomputed on every tick, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldClockRow {
    /// City label, or the favorite placeholder
    pub label: String,
    /// Zone identifier the row was computed from
    pub zone_id: String,
    /// Current local time in the fixed pattern
    pub local_time: String,
    /// UTC offset at this instant, `±HHMM`
    pub utc_offset: String,
}

/// Computes the world-clock rows for the current instant.
pub fn snapshot(cities: &[ZoneRef], favorites: &FavoriteSet) -> Vec<WorldClockRow> {
    snapshot_at(cities, favorites, Utc::now())
}

/// Computes the world-clock rows for `instant`.
///
/// City rows come first in catalog order, then one row per favorite in
/// stored order, labeled [`FAVORITE_LABEL`]. Favorites overlapping a catalog
/// zone are not deduplicated. An entry whose identifier no longer resolves
/// is dropped from the output with a warning; the rest of the snapshot is
/// unaffected.
pub fn snapshot_at(
    cities: &[ZoneRef],
    favorites: &FavoriteSet,
    instant: DateTime<Utc>,
) -> Vec<WorldClockRow> {
    let mut rows = Vec::with_capacity(cities.len() + favorites.len());

    for city in cities {
        match ZoneCatalog::resolve(&city.zone_id) {
            Ok(tz) => rows.push(row_at(&city.label, &city.zone_id, tz, instant)),
            Err(_) => warn!(zone_id = %city.zone_id, "skipping world clock row: unresolvable zone"),
        }
    }

    for zone_id in favorites.iter() {
        match ZoneCatalog::resolve(zone_id) {
            Ok(tz) => rows.push(row_at(FAVORITE_LABEL, zone_id, tz, instant)),
            Err(_) => warn!(zone_id = %zone_id, "skipping world clock row: unresolvable favorite"),
        }
    }

    rows
}

fn row_at(label: &str, zone_id: &str, tz: Tz, instant: DateTime<Utc>) -> WorldClockRow {
    let local = instant.with_timezone(&tz);
    WorldClockRow {
        label: label.to_string(),
        zone_id: zone_id.to_string(),
        local_time: local.format(TIME_FORMAT).to_string(),
        utc_offset: local.format("%z").to_string(),
    }
}

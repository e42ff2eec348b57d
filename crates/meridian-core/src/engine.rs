//! The engine facade consumed by the presentation layer.
//!
//! Owns the catalog, the favorite list, and the history ledger, together
//! with the repositories that back them. The presentation layer holds one
//! `Engine` instance and calls into it; nothing here is a singleton.

use chrono::Local;
use tracing::warn;

use crate::catalog::{ZoneCatalog, ZoneRef};
use crate::clock::{self, WorldClockRow};
use crate::convert::{self, TIME_FORMAT};
use crate::error::{MeridianError, Result};
use crate::favorites::{FavoriteSet, FavoritesRepository};
use crate::history::{ConversionRecord, HistoryLedger, HistoryRepository};

/// Outcome of a conversion that was appended to the history ledger.
#[derive(Debug)]
pub struct RecordedConversion {
    /// The record that was appended.
    pub record: ConversionRecord,
    /// Present when the ledger could not be persisted. The in-memory append
    /// is kept either way, so the running session still shows the record.
    pub persist_error: Option<MeridianError>,
}

/// Time-zone conversion and world-clock state engine.
///
/// Mutating operations validate first, mutate in memory, then persist. A
/// persistence failure after the mutation is surfaced to the caller without
/// rolling the in-memory state back ([`MeridianError::is_persistence`]
/// distinguishes the two phases).
pub struct Engine {
    catalog: ZoneCatalog,
    cities: Vec<ZoneRef>,
    favorites: FavoriteSet,
    history: HistoryLedger,
    favorites_repo: Box<dyn FavoritesRepository>,
    history_repo: Box<dyn HistoryRepository>,
}

impl Engine {
    /// Builds the engine, loading both persisted collections.
    ///
    /// Loads are best-effort by repository contract, so construction always
    /// succeeds; a fresh install simply starts with empty collections.
    pub fn load(
        favorites_repo: Box<dyn FavoritesRepository>,
        history_repo: Box<dyn HistoryRepository>,
    ) -> Self {
        let favorites = favorites_repo.load();
        let history = history_repo.load();
        Self {
            catalog: ZoneCatalog::new(),
            cities: ZoneCatalog::default_cities(),
            favorites,
            history,
            favorites_repo,
            history_repo,
        }
    }

    /// The zone identifier catalog.
    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// The default city list, in display order.
    pub fn cities(&self) -> &[ZoneRef] {
        &self.cities
    }

    /// The favorite zone list, in stored order.
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// The conversion history ledger.
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Converts a wall-clock time between zones without recording it.
    pub fn convert(&self, time_text: &str, from_zone_id: &str, to_zone_id: &str) -> Result<String> {
        convert::convert(time_text, from_zone_id, to_zone_id)
    }

    /// Converts a wall-clock time and appends the outcome to the history
    /// ledger, stamped with the local wall time of the action.
    ///
    /// Returns `Err` only when the conversion itself is rejected (bad input,
    /// unknown zone); nothing is recorded in that case. A persistence
    /// failure after the append is reported through
    /// [`RecordedConversion::persist_error`].
    pub fn convert_and_record(
        &mut self,
        time_text: &str,
        from_zone_id: &str,
        to_zone_id: &str,
    ) -> Result<RecordedConversion> {
        let to_time = convert::convert(time_text, from_zone_id, to_zone_id)?;
        let record = ConversionRecord {
            timestamp: Local::now().format(TIME_FORMAT).to_string(),
            from_zone: from_zone_id.to_string(),
            to_zone: to_zone_id.to_string(),
            from_time: time_text.to_string(),
            to_time,
        };

        self.history.append(record.clone());
        let persist_error = self.history_repo.save(&self.history).err();
        if let Some(err) = &persist_error {
            warn!(error = %err, "conversion kept in memory but history could not be persisted");
        }

        Ok(RecordedConversion {
            record,
            persist_error,
        })
    }

    /// Computes the world-clock rows for the current instant: default cities
    /// first, then favorites.
    pub fn world_clocks(&self) -> Vec<WorldClockRow> {
        clock::snapshot(&self.cities, &self.favorites)
    }

    /// Adds a favorite zone after validating the identifier.
    ///
    /// Unknown identifiers and duplicates are rejected before any mutation.
    /// An `Io`/`Serialization` error means the favorite was added in memory
    /// but could not be persisted.
    pub fn add_favorite(&mut self, zone_id: &str) -> Result<()> {
        ZoneCatalog::resolve(zone_id)?;
        if !self.favorites.add(zone_id) {
            return Err(MeridianError::duplicate_favorite(zone_id));
        }
        self.favorites_repo.save(&self.favorites)
    }

    /// Removes a favorite zone.
    ///
    /// An `Io`/`Serialization` error means the favorite was removed in
    /// memory but the shrunken list could not be persisted.
    pub fn remove_favorite(&mut self, zone_id: &str) -> Result<()> {
        if !self.favorites.remove(zone_id) {
            return Err(MeridianError::favorite_not_found(zone_id));
        }
        self.favorites_repo.save(&self.favorites)
    }

    /// Empties the history ledger and persists the empty document.
    ///
    /// Unconditional once called; asking the user for confirmation is the
    /// presentation layer's job.
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.history_repo.save(&self.history)
    }

    /// Renders the full history in chronological order for export.
    pub fn export_history(&self) -> String {
        self.history.export_text()
    }

    /// Renders the history most-recent-first for on-screen display.
    pub fn history_for_display(&self) -> Vec<String> {
        self.history.render_for_display()
    }
}

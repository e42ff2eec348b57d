//! Error types for the Meridian engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Meridian engine and its persistence layer.
///
/// Variants are split along the recovery policy: parse and zone errors are
/// rejected at the boundary with no state mutated, while `Io` and
/// `Serialization` report persistence write failures after the in-memory
/// mutation has already been applied.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum MeridianError {
    /// Input text does not match the `YYYY-MM-DD HH:MM:SS` pattern, or names
    /// a date that does not exist on the calendar.
    #[error("Cannot parse '{input}' as 'YYYY-MM-DD HH:MM:SS'")]
    ParseFailure { input: String },

    /// A zone identifier is not present in the bundled timezone database.
    #[error("Unknown time zone: '{zone_id}'")]
    UnknownZone { zone_id: String },

    /// A wall-clock time that could not be mapped to an instant in its zone,
    /// even after gap resolution.
    #[error("'{time}' does not name a representable instant in '{zone_id}'")]
    UnresolvableLocalTime { time: String, zone_id: String },

    /// The zone is already present in the favorite list.
    #[error("Time zone '{zone_id}' is already a favorite")]
    DuplicateFavorite { zone_id: String },

    /// The zone is not present in the favorite list.
    #[error("Time zone '{zone_id}' is not a favorite")]
    FavoriteNotFound { zone_id: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl MeridianError {
    /// Creates a ParseFailure error
    pub fn parse_failure(input: impl Into<String>) -> Self {
        Self::ParseFailure {
            input: input.into(),
        }
    }

    /// Creates an UnknownZone error
    pub fn unknown_zone(zone_id: impl Into<String>) -> Self {
        Self::UnknownZone {
            zone_id: zone_id.into(),
        }
    }

    /// Creates an UnresolvableLocalTime error
    pub fn unresolvable_local_time(time: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self::UnresolvableLocalTime {
            time: time.into(),
            zone_id: zone_id.into(),
        }
    }

    /// Creates a DuplicateFavorite error
    pub fn duplicate_favorite(zone_id: impl Into<String>) -> Self {
        Self::DuplicateFavorite {
            zone_id: zone_id.into(),
        }
    }

    /// Creates a FavoriteNotFound error
    pub fn favorite_not_found(zone_id: impl Into<String>) -> Self {
        Self::FavoriteNotFound {
            zone_id: zone_id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this is a ParseFailure error
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailure { .. })
    }

    /// Check if this is an UnknownZone error
    pub fn is_unknown_zone(&self) -> bool {
        matches!(self, Self::UnknownZone { .. })
    }

    /// Check if this error reports a persistence write failure.
    ///
    /// Persistence failures are surfaced as warnings: the in-memory mutation
    /// they follow is kept, so callers should not roll back on them.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Serialization { .. })
    }
}

impl From<std::io::Error> for MeridianError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MeridianError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, MeridianError>`.
pub type Result<T> = std::result::Result<T, MeridianError>;

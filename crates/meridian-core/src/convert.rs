//! Wall-clock conversion between time zones.
//!
//! A timestamp string is parsed as naive wall-clock fields, bound to the
//! source zone, and reprojected into the target zone. The function is pure:
//! it performs no IO, caches nothing, and the same inputs always produce the
//! same output under the same tzdata rules.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::catalog::ZoneCatalog;
use crate::error::{MeridianError, Result};

/// Fixed timestamp pattern used wherever timestamps cross the engine
/// boundary: input parsing, conversion output, world-clock rows, and the
/// persisted history documents.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `time_text` against [`TIME_FORMAT`].
///
/// Wrong separators, missing fields, trailing garbage, and calendrically
/// invalid dates (April 31) all fail with `ParseFailure`.
pub fn parse_time_text(time_text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time_text, TIME_FORMAT)
        .map_err(|_| MeridianError::parse_failure(time_text))
}

/// Converts `time_text`, read as wall-clock time in `from_zone_id`, into the
/// equivalent wall-clock time in `to_zone_id`.
///
/// Daylight-saving edge cases in the source zone resolve deterministically,
/// see [`bind_to_zone`].
pub fn convert(time_text: &str, from_zone_id: &str, to_zone_id: &str) -> Result<String> {
    let naive = parse_time_text(time_text)?;
    let from = ZoneCatalog::resolve(from_zone_id)?;
    let to = ZoneCatalog::resolve(to_zone_id)?;
    let instant = bind_to_zone(naive, from)?;
    Ok(instant.with_timezone(&to).format(TIME_FORMAT).to_string())
}

/// Binds naive wall-clock fields to a zone, producing an absolute instant.
///
/// Resolution policy for daylight-saving transitions:
/// - fall-back overlap (the wall time occurs twice): the earlier instant,
///   i.e. the first occurrence on the local clock;
/// - spring-forward gap (the wall time never occurs): the wall time is
///   shifted forward by the width of the gap, so 02:30 in a 02:00→03:00
///   jump is read as 03:30.
pub fn bind_to_zone(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier),
        LocalResult::None => shift_past_gap(naive, tz),
    }
}

/// Resolves a wall time inside a forward-transition gap.
///
/// The gap width is the difference between the UTC offsets in force on
/// either side of the transition; sampling one day out in each direction is
/// safely clear of the transition itself.
fn shift_past_gap(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    let unresolvable = || {
        MeridianError::unresolvable_local_time(naive.format(TIME_FORMAT).to_string(), tz.name())
    };

    let before = tz
        .from_local_datetime(&(naive - Duration::days(1)))
        .earliest()
        .ok_or_else(unresolvable)?;
    let after = tz
        .from_local_datetime(&(naive + Duration::days(1)))
        .earliest()
        .ok_or_else(unresolvable)?;

    let gap_seconds =
        i64::from(after.offset().fix().local_minus_utc() - before.offset().fix().local_minus_utc());
    if gap_seconds <= 0 {
        return Err(unresolvable());
    }

    tz.from_local_datetime(&(naive + Duration::seconds(gap_seconds)))
        .earliest()
        .ok_or_else(unresolvable)
}

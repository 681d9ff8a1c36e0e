//! Coordinates to IANA zone, and local wall-clock time to UTC.

use crate::ephemeris::GeoLocation;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};
use lazy_static::lazy_static;
use serde::Serialize;
use tzf_rs::DefaultFinder;

pub const UTC_ZONE: &str = "UTC";

pub trait ZoneFinder: Send + Sync {
    /// IANA zone id at `location`, or `None` when the point is not covered.
    fn zone_at(&self, location: &GeoLocation) -> Option<String>;
}

lazy_static! {
    static ref FINDER: DefaultFinder = DefaultFinder::new();
}

/// Offline polygon lookup backed by the bundled tz boundary data.
#[derive(Debug, Default, Clone, Copy)]
pub struct TzfZoneFinder;

impl ZoneFinder for TzfZoneFinder {
    fn zone_at(&self, location: &GeoLocation) -> Option<String> {
        let name = FINDER.get_tz_name(location.lon, location.lat);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// A zone whose historical offsets are replaced before a given year.
#[derive(Debug, Clone, Copy)]
pub struct ZoneOverride {
    pub zone: &'static str,
    pub before_year: i32,
    pub replacement: &'static str,
}

/// Morocco kept GMT without summer time until 2008.
pub const ZONE_OVERRIDES: &[ZoneOverride] = &[ZoneOverride {
    zone: "Africa/Casablanca",
    before_year: 2008,
    replacement: UTC_ZONE,
}];

pub fn apply_overrides(zone: &str, year: i32) -> &str {
    ZONE_OVERRIDES
        .iter()
        .find(|o| o.zone == zone && year < o.before_year)
        .map(|o| o.replacement)
        .unwrap_or(zone)
}

/// How a wall-clock time mapped onto the zone's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Unique,
    /// Repeated hour at the end of DST; the standard-time reading was kept.
    Ambiguous,
    /// Skipped hour at the start of DST; read with the post-transition offset.
    Nonexistent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Localized {
    pub utc: DateTime<Utc>,
    pub offset_seconds: i32,
    pub resolution: Resolution,
}

// Longest real-world gap is one hour, probe a little past it.
const GAP_PROBE_STEPS: i64 = 6;

pub fn localize(tz: Tz, naive: NaiveDateTime) -> Localized {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Localized {
            utc: dt.with_timezone(&Utc),
            offset_seconds: dt.offset().fix().local_minus_utc(),
            resolution: Resolution::Unique,
        },
        LocalResult::Ambiguous(earlier, later) => {
            let chosen = if earlier.offset().dst_offset() == Duration::zero() {
                earlier
            } else {
                later
            };
            Localized {
                utc: chosen.with_timezone(&Utc),
                offset_seconds: chosen.offset().fix().local_minus_utc(),
                resolution: Resolution::Ambiguous,
            }
        }
        LocalResult::None => {
            let offset_seconds = (1..=GAP_PROBE_STEPS)
                .find_map(|step| {
                    match tz.from_local_datetime(&(naive + Duration::minutes(30 * step))) {
                        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                            Some(dt.offset().fix().local_minus_utc())
                        }
                        LocalResult::None => None,
                    }
                })
                .unwrap_or_else(|| tz.offset_from_utc_datetime(&naive).fix().local_minus_utc());
            Localized {
                utc: Utc.from_utc_datetime(&(naive - Duration::seconds(offset_seconds as i64))),
                offset_seconds,
                resolution: Resolution::Nonexistent,
            }
        }
    }
}

//! Time Resolver: birth data to a UTC instant, location and Julian day.

pub mod geocode;
pub mod julian;
pub mod resolver;
pub mod zones;

pub use geocode::{GeocodeError, Geocoder, NominatimGeocoder};
pub use julian::julian_day;
pub use resolver::{LocationSource, ResolvedTime, TimeResolver};
pub use zones::{apply_overrides, localize, Resolution, TzfZoneFinder, ZoneFinder, ZONE_OVERRIDES};

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Unrecognised birth date/time '{input}': {source}")]
    UnparseableDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Geocoder could not be initialised: {0}")]
    Geocoder(#[from] GeocodeError),
}

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];
// Long form where the date string already carries the time, e.g. "14 July 1989 08:30".
const LONG_DATE_FORMAT: &str = "%d %B %Y %H:%M";

/// Parse the naive local birth time from the separate date and time strings.
pub fn parse_local(date: &str, time: &str) -> Result<NaiveDateTime, TimeError> {
    let combined = format!("{} {}", date.trim(), time.trim());
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&combined, format) {
            return Ok(dt);
        }
    }
    NaiveDateTime::parse_from_str(date.trim(), LONG_DATE_FORMAT).map_err(|source| {
        TimeError::UnparseableDate {
            input: combined.trim().to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn iso_date_and_time() {
        let dt = parse_local("1989-07-14", "08:30").unwrap();
        assert_eq!(dt, NaiveDate::from_ymd_opt(1989, 7, 14).unwrap().and_hms_opt(8, 30, 0).unwrap());
        let with_seconds = parse_local("1989-07-14", "08:30:15").unwrap();
        assert_eq!((with_seconds - dt).num_seconds(), 15);
    }

    #[test]
    fn long_form_date_carries_time() {
        let dt = parse_local("14 July 1989 08:30", "").unwrap();
        assert_eq!(dt, NaiveDate::from_ymd_opt(1989, 7, 14).unwrap().and_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn garbage_is_fatal() {
        let err = parse_local("le quatorze juillet", "matin").unwrap_err();
        assert!(matches!(err, TimeError::UnparseableDate { .. }));
        assert!(err.to_string().contains("le quatorze juillet"));
    }
}

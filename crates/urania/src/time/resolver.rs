use crate::chart::BirthQuery;
use crate::ephemeris::GeoLocation;
use crate::time::geocode::{Geocoder, NominatimGeocoder};
use crate::time::zones::{apply_overrides, localize, Resolution, TzfZoneFinder, ZoneFinder, UTC_ZONE};
use crate::time::{julian_day, parse_local, TimeError};
use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use urania_config::UraniaSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    Supplied,
    Geocoded,
    Fallback,
}

/// Outcome of resolving a [`BirthQuery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTime {
    pub local: NaiveDateTime,
    pub utc: DateTime<Utc>,
    pub timezone: String,
    /// Local minus UTC. For a supplied UTC instant this is the offset implied
    /// by the local wall-clock time.
    pub utc_offset_seconds: i32,
    pub resolution: Resolution,
    pub location: GeoLocation,
    pub location_source: LocationSource,
}

impl ResolvedTime {
    pub fn julian_day(&self) -> f64 {
        julian_day(self.utc)
    }
}

pub struct TimeResolver {
    geocoder: Box<dyn Geocoder>,
    zones: Box<dyn ZoneFinder>,
    fallback: GeoLocation,
}

impl TimeResolver {
    pub fn new(
        geocoder: Box<dyn Geocoder>,
        zones: Box<dyn ZoneFinder>,
        fallback: GeoLocation,
    ) -> Self {
        Self {
            geocoder,
            zones,
            fallback,
        }
    }

    /// Nominatim geocoding and offline zone lookup, as configured.
    pub fn from_settings(settings: &UraniaSettings) -> Result<Self, TimeError> {
        let geocoder = NominatimGeocoder::new(&settings.geocoder)?;
        Ok(Self::new(
            Box::new(geocoder),
            Box::new(TzfZoneFinder),
            GeoLocation {
                lat: settings.fallback_location.lat,
                lon: settings.fallback_location.lon,
            },
        ))
    }

    pub fn resolve(&self, query: &BirthQuery) -> Result<ResolvedTime, TimeError> {
        let (location, location_source) = self.locate(query);
        let local = parse_local(&query.date, &query.time)?;

        if let Some(utc) = query.utc {
            log::debug!("Using supplied UTC instant {}", utc);
            return Ok(ResolvedTime {
                local,
                utc,
                timezone: query.timezone.clone().unwrap_or_else(|| UTC_ZONE.to_string()),
                utc_offset_seconds: (local - utc.naive_utc()).num_seconds() as i32,
                resolution: Resolution::Unique,
                location,
                location_source,
            });
        }

        let zone = match &query.timezone {
            Some(tzid) => tzid.clone(),
            None => self.zone_for(&location, local.year()),
        };
        let (tz, timezone) = match zone.parse::<Tz>() {
            Ok(tz) => (tz, zone),
            Err(_) => {
                log::warn!("Unknown timezone '{}', reading birth time as UTC", zone);
                (Tz::UTC, UTC_ZONE.to_string())
            }
        };

        let localized = localize(tz, local);
        match localized.resolution {
            Resolution::Ambiguous => {
                log::info!("{} {} is ambiguous, keeping standard time", timezone, local)
            }
            Resolution::Nonexistent => {
                log::info!("{} {} does not exist, reading it as summer time", timezone, local)
            }
            Resolution::Unique => {}
        }
        log::debug!(
            "Local {} ({}, {:+}s) -> UTC {}",
            local,
            timezone,
            localized.offset_seconds,
            localized.utc
        );

        Ok(ResolvedTime {
            local,
            utc: localized.utc,
            timezone,
            utc_offset_seconds: localized.offset_seconds,
            resolution: localized.resolution,
            location,
            location_source,
        })
    }

    fn locate(&self, query: &BirthQuery) -> (GeoLocation, LocationSource) {
        if let Some(location) = query.coordinates {
            return (location, LocationSource::Supplied);
        }
        match self.geocoder.geocode(&query.place) {
            Ok(location) => {
                log::info!(
                    "Geocoded '{}' to ({:.4}, {:.4})",
                    query.place,
                    location.lat,
                    location.lon
                );
                (location, LocationSource::Geocoded)
            }
            Err(e) => {
                log::warn!(
                    "Geocoding '{}' failed ({}), using fallback ({}, {})",
                    query.place,
                    e,
                    self.fallback.lat,
                    self.fallback.lon
                );
                (self.fallback, LocationSource::Fallback)
            }
        }
    }

    fn zone_for(&self, location: &GeoLocation, year: i32) -> String {
        let found = self
            .zones
            .zone_at(location)
            .unwrap_or_else(|| UTC_ZONE.to_string());
        let zone = apply_overrides(&found, year);
        if zone != found {
            log::info!("Historical override: {} in {} read as {}", found, year, zone);
        }
        zone.to_string()
    }
}

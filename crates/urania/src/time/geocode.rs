//! Place name to coordinates.

use crate::ephemeris::GeoLocation;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use urania_config::GeocoderSettings;

/// Geocoding failures. Never fatal: the resolver falls back to its default
/// location.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("No match for place '{place}'")]
    NotFound { place: String },
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Geocoder returned an invalid coordinate: {value}")]
    InvalidCoordinate { value: String },
}

pub trait Geocoder: Send + Sync {
    fn geocode(&self, place: &str) -> Result<GeoLocation, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// OpenStreetMap Nominatim search client.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(settings: &GeocoderSettings) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn parse_coordinate(value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate {
            value: value.to_string(),
        })
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, place: &str) -> Result<GeoLocation, GeocodeError> {
        let places: Vec<NominatimPlace> = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", place), ("format", "jsonv2"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        let first = places.into_iter().next().ok_or_else(|| GeocodeError::NotFound {
            place: place.to_string(),
        })?;
        Ok(GeoLocation {
            lat: parse_coordinate(&first.lat)?,
            lon: parse_coordinate(&first.lon)?,
        })
    }
}

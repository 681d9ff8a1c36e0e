#![allow(dead_code)]

use urania::bodies::{Body, EPHEMERIS_BODIES};
use urania::ephemeris::{FixedEphemeris, GeoLocation, HouseSystem};
use urania::time::{GeocodeError, Geocoder, TimeResolver, ZoneFinder};
use urania::ChartEngine;

pub const PARIS: GeoLocation = GeoLocation {
    lat: 48.8566,
    lon: 2.3522,
};

pub struct FailingGeocoder;

impl Geocoder for FailingGeocoder {
    fn geocode(&self, place: &str) -> Result<GeoLocation, GeocodeError> {
        Err(GeocodeError::NotFound {
            place: place.to_string(),
        })
    }
}

pub struct FixedGeocoder(pub GeoLocation);

impl Geocoder for FixedGeocoder {
    fn geocode(&self, _place: &str) -> Result<GeoLocation, GeocodeError> {
        Ok(self.0)
    }
}

pub struct FixedZone(pub Option<&'static str>);

impl ZoneFinder for FixedZone {
    fn zone_at(&self, _location: &GeoLocation) -> Option<String> {
        self.0.map(str::to_string)
    }
}

pub fn resolver(zone: Option<&'static str>) -> TimeResolver {
    TimeResolver::new(Box::new(FailingGeocoder), Box::new(FixedZone(zone)), PARIS)
}

/// Every ephemeris body at `lons[i]`, equal houses from `asc`.
pub fn ephemeris(lons: [f64; 11], asc: f64) -> FixedEphemeris {
    EPHEMERIS_BODIES
        .iter()
        .zip(lons)
        .fold(FixedEphemeris::new(24.0), |eph, (body, lon)| {
            eph.with_body(*body, lon)
        })
        .with_equal_houses(asc)
}

/// Bodies spread one per sign, Sun at 5° Aries.
pub fn spread() -> [f64; 11] {
    [5.0, 47.0, 68.0, 101.0, 140.0, 163.0, 199.0, 222.0, 256.0, 281.0, 317.0]
}

pub fn engine(eph: FixedEphemeris) -> ChartEngine<FixedEphemeris> {
    ChartEngine::new(eph, resolver(Some("Europe/Paris")), HouseSystem::Equal)
}

pub fn lon_of(body: Body, lons: &[f64; 11]) -> f64 {
    let i = EPHEMERIS_BODIES.iter().position(|b| *b == body).unwrap();
    lons[i]
}

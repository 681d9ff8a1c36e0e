use crate::bodies::Body;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Planetary position data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
    /// Whether the body is retrograde
    pub retrograde: bool,
}

impl BodyPosition {
    pub fn from_longitude(lon: f64, speed_lon: f64) -> Self {
        Self {
            lon,
            lat: 0.0,
            speed_lon,
            retrograde: speed_lon < 0.0,
        }
    }
}

/// The four chart angles in tropical degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub asc: f64,
    pub mc: f64,
    pub desc: f64,
    pub ic: f64,
}

impl ChartAngles {
    /// Derive descendant and IC from ascendant and MC.
    pub fn from_asc_mc(asc: f64, mc: f64) -> Self {
        Self {
            asc,
            mc,
            desc: (asc + 180.0) % 360.0,
            ic: (mc + 180.0) % 360.0,
        }
    }
}

/// House cusps (house 1 first) and angles from a quadrant house system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    pub system: HouseSystem,
    pub cusps: [f64; 12],
    pub angles: ChartAngles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("placidus", HouseSystem::Placidus, b'P'),
    ("whole_sign", HouseSystem::WholeSign, b'W'),
    ("koch", HouseSystem::Koch, b'K'),
    ("equal", HouseSystem::Equal, b'E'),
    ("regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("campanus", HouseSystem::Campanus, b'C'),
    ("alcabitius", HouseSystem::Alcabitius, b'A'),
    ("morinus", HouseSystem::Morinus, b'M'),
];

impl HouseSystem {
    pub fn from_name(name: &str) -> Option<HouseSystem> {
        let lower = name.to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(n, _, _)| *n == lower)
            .map(|(_, system, _)| *system)
    }

    pub fn valid_names() -> Vec<String> {
        HOUSE_SYSTEMS.iter().map(|(n, _, _)| n.to_string()).collect()
    }

    /// Single-letter Swiss Ephemeris code.
    pub fn code(self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }
}

/// Sidereal standard used to derive the ayanamsa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiderealMode {
    Lahiri,
}

/// Process-wide ephemeris configuration, installed once at start-up.
#[derive(Debug, Clone)]
pub struct EphemerisConfig {
    pub path: PathBuf,
    pub house_system: HouseSystem,
    pub sidereal_mode: SiderealMode,
}

/// Raw ephemeris output for one instant and place.
#[derive(Debug, Clone)]
pub struct EphemerisSnapshot {
    pub julian_day: f64,
    pub ayanamsa: f64,
    /// The 11 ephemeris bodies, in `EPHEMERIS_BODIES` order.
    pub bodies: Vec<(Body, BodyPosition)>,
    pub houses: HouseFrame,
}

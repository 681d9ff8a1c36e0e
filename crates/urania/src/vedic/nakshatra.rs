//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use crate::angles::{normalize_degrees, round2};
use crate::bodies::Body;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

// (display name, planetary lord)
const NAKSHATRA_ORDER: [(&str, Body); 27] = [
    ("Ashwini", Body::Ketu),
    ("Bharani", Body::Venus),
    ("Krittika", Body::Sun),
    ("Rohini", Body::Moon),
    ("Mrigashira", Body::Mars),
    ("Ardra", Body::Rahu),
    ("Punarvasu", Body::Jupiter),
    ("Pushya", Body::Saturn),
    ("Ashlesha", Body::Mercury),
    ("Magha", Body::Ketu),
    ("Purva Phalguni", Body::Venus),
    ("Uttara Phalguni", Body::Sun),
    ("Hasta", Body::Moon),
    ("Chitra", Body::Mars),
    ("Swati", Body::Rahu),
    ("Vishakha", Body::Jupiter),
    ("Anuradha", Body::Saturn),
    ("Jyeshtha", Body::Mercury),
    ("Mula", Body::Ketu),
    ("Purva Ashadha", Body::Venus),
    ("Uttara Ashadha", Body::Sun),
    ("Shravana", Body::Moon),
    ("Dhanishta", Body::Mars),
    ("Shatabhisha", Body::Rahu),
    ("Purva Bhadrapada", Body::Jupiter),
    ("Uttara Bhadrapada", Body::Saturn),
    ("Revati", Body::Mercury),
];

/// Where a sidereal longitude falls among the 27 mansions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    pub name: String,
    pub index: usize,
    pub lord: Body,
    /// 1 to 4.
    pub pada: u8,
    /// Offset from the start of the mansion, rounded to 2 decimals.
    pub degree_in_nakshatra: f64,
}

/// Mansion containing `sidereal_longitude`.
pub fn nakshatra_of(sidereal_longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(sidereal_longitude);
    let mut index = (lon / NAKSHATRA_SEGMENT_SIZE).floor() as usize;
    if index >= NAKSHATRA_ORDER.len() {
        index = 0;
    }
    let (name, lord) = NAKSHATRA_ORDER[index];
    let offset = lon % NAKSHATRA_SEGMENT_SIZE;
    let pada = ((offset / PADA_SIZE).floor() as i64 + 1).clamp(1, 4) as u8;

    NakshatraPlacement {
        name: name.to_string(),
        index,
        lord,
        pada,
        degree_in_nakshatra: round2(offset),
    }
}

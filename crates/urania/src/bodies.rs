//! Chart bodies and the fixed per-body tables the extractor relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point placed on the chart. Declaration order is the canonical display
/// order and is used to orient unordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    #[serde(rename = "Ascendant")]
    Ascendant,
    #[serde(rename = "Soleil")]
    Sun,
    #[serde(rename = "Lune")]
    Moon,
    #[serde(rename = "Mercure")]
    Mercury,
    #[serde(rename = "Vénus")]
    Venus,
    #[serde(rename = "Mars")]
    Mars,
    #[serde(rename = "Jupiter")]
    Jupiter,
    #[serde(rename = "Saturne")]
    Saturn,
    #[serde(rename = "Uranus")]
    Uranus,
    #[serde(rename = "Neptune")]
    Neptune,
    #[serde(rename = "Pluton")]
    Pluto,
    #[serde(rename = "Rahu")]
    Rahu,
    #[serde(rename = "Ketu")]
    Ketu,
    #[serde(rename = "Lune Noire")]
    DarkMoon,
    #[serde(rename = "Chiron")]
    Chiron,
}

/// Bodies read from the ephemeris for both frames, in call order.
pub const EPHEMERIS_BODIES: [Body; 11] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Rahu,
];

/// The seven visible planets of traditional astrology.
pub const CLASSICAL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

/// Sun through Pluto.
pub const PLANETS: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub fn name(self) -> &'static str {
        match self {
            Body::Ascendant => "Ascendant",
            Body::Sun => "Soleil",
            Body::Moon => "Lune",
            Body::Mercury => "Mercure",
            Body::Venus => "Vénus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturne",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluton",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
            Body::DarkMoon => "Lune Noire",
            Body::Chiron => "Chiron",
        }
    }

    /// Swiss Ephemeris body number. Ketu and the Ascendant are derived, not
    /// looked up.
    pub fn swiss_code(self) -> Option<i32> {
        match self {
            Body::Sun => Some(0),
            Body::Moon => Some(1),
            Body::Mercury => Some(2),
            Body::Venus => Some(3),
            Body::Mars => Some(4),
            Body::Jupiter => Some(5),
            Body::Saturn => Some(6),
            Body::Uranus => Some(7),
            Body::Neptune => Some(8),
            Body::Pluto => Some(9),
            Body::Rahu => Some(10),     // MEAN_NODE
            Body::DarkMoon => Some(12), // MEAN_APOG
            Body::Chiron => Some(15),
            Body::Ketu | Body::Ascendant => None,
        }
    }

    pub fn is_personal(self) -> bool {
        matches!(
            self,
            Body::Sun | Body::Moon | Body::Mercury | Body::Venus | Body::Mars
        )
    }

    pub fn is_social(self) -> bool {
        matches!(self, Body::Jupiter | Body::Saturn)
    }

    pub fn is_classical(self) -> bool {
        self.is_personal() || self.is_social()
    }

    pub fn is_node(self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }

    pub fn is_angle(self) -> bool {
        matches!(self, Body::Ascendant)
    }

    /// Rank used to pick the dominant member of a group.
    pub fn strength(self) -> u8 {
        match self {
            Body::Saturn => 100,
            Body::Pluto => 95,
            Body::Mars => 90,
            Body::Uranus | Body::Sun => 85,
            Body::Jupiter => 80,
            Body::Moon => 75,
            Body::Neptune => 70,
            Body::Venus => 65,
            Body::Mercury => 60,
            Body::Rahu | Body::Ketu => 55,
            Body::DarkMoon => 50,
            Body::Chiron => 45,
            Body::Ascendant => 0,
        }
    }

    /// How a dominant body acts on the rest of its group.
    pub fn influence(self) -> &'static str {
        match self {
            Body::Saturn => "restreint et discipline",
            Body::Pluto => "transforme en profondeur",
            Body::Mars => "dynamise",
            Body::Uranus => "électrise et bouscule",
            Body::Sun => "éclaire et centralise",
            Body::Jupiter => "amplifie",
            _ => "colore et module",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

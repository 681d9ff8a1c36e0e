//! Zodiac signs and their element/modality groupings.

use crate::angles::round2;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "Bélier")]
    Aries,
    #[serde(rename = "Taureau")]
    Taurus,
    #[serde(rename = "Gémeaux")]
    Gemini,
    #[serde(rename = "Cancer")]
    Cancer,
    #[serde(rename = "Lion")]
    Leo,
    #[serde(rename = "Vierge")]
    Virgo,
    #[serde(rename = "Balance")]
    Libra,
    #[serde(rename = "Scorpion")]
    Scorpio,
    #[serde(rename = "Sagittaire")]
    Sagittarius,
    #[serde(rename = "Capricorne")]
    Capricorn,
    #[serde(rename = "Verseau")]
    Aquarius,
    #[serde(rename = "Poissons")]
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

pub const SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

pub const ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
pub const MODALITIES: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

impl Sign {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Sign {
        SIGNS[index % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Bélier",
            Sign::Taurus => "Taureau",
            Sign::Gemini => "Gémeaux",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Lion",
            Sign::Virgo => "Vierge",
            Sign::Libra => "Balance",
            Sign::Scorpio => "Scorpion",
            Sign::Sagittarius => "Sagittaire",
            Sign::Capricorn => "Capricorne",
            Sign::Aquarius => "Verseau",
            Sign::Pisces => "Poissons",
        }
    }

    /// Longitude of 0° of this sign.
    pub fn start(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub fn opposite(self) -> Sign {
        Sign::from_index(self.index() + 6)
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Feu",
            Element::Earth => "Terre",
            Element::Air => "Air",
            Element::Water => "Eau",
        }
    }
}

impl Modality {
    pub fn name(self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixe",
            Modality::Mutable => "mutable",
        }
    }
}

/// Sign containing `longitude` and the degree within it (rounded to 2
/// decimals). An index of 12 (longitude exactly 360) wraps to Aries.
pub fn sign_of(longitude: f64) -> (Sign, f64) {
    let mut index = (longitude / 30.0).floor() as i64;
    if !(0..12).contains(&index) {
        index = index.rem_euclid(12);
    }
    (Sign::from_index(index as usize), round2(longitude.rem_euclid(30.0)))
}

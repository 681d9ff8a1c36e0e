use crate::aspects::Aspect;
use crate::bodies::{Body, PLANETS};
use crate::ephemeris::{ChartAngles, HouseSystem};
use crate::patterns::StrongPoint;
use crate::time::ResolvedTime;
use crate::vedic::NakshatraPlacement;
use crate::western::Sign;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    Tropical,
    Sidereal,
}

/// A body in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPosition {
    /// 0 to 360, rounded to 2 decimals.
    pub longitude: f64,
    pub sign: Sign,
    pub degree: f64,
    /// Cusp lookup in the tropical frame, whole-sign offset in the sidereal one.
    pub house: u8,
    pub speed: f64,
    pub retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<NakshatraPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house: u8,
    pub degree: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
}

/// Ruler of the ascendant sign and where that ruler sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerRecord {
    pub ascendant_sign: Sign,
    pub ruler: Body,
    pub position: Option<ChartPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptedSign {
    pub sign: Sign,
    /// House whose cusps enclose the whole sign.
    pub house: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interceptions {
    pub signs: Vec<InterceptedSign>,
    /// Opposite intercepted signs, in zodiac order.
    pub axes: Vec<(Sign, Sign)>,
}

impl Interceptions {
    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }
}

/// A computed natal chart. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub name: String,
    pub time: ResolvedTime,
    pub julian_day: f64,
    pub ayanamsa: f64,
    pub house_system: HouseSystem,
    pub angles: ChartAngles,
    pub tropical: BTreeMap<Body, ChartPosition>,
    pub sidereal: BTreeMap<Body, ChartPosition>,
    pub tropical_houses: Vec<HouseCusp>,
    pub sidereal_houses: Vec<HouseCusp>,
    /// Tropical aspects, tightest first.
    pub aspects: Vec<Aspect>,
    pub tropical_ruler: RulerRecord,
    pub sidereal_ruler: RulerRecord,
    pub interceptions: Interceptions,
    pub strong_points: Vec<StrongPoint>,
}

impl Chart {
    pub fn position(&self, frame: Frame, body: Body) -> Option<&ChartPosition> {
        match frame {
            Frame::Tropical => self.tropical.get(&body),
            Frame::Sidereal => self.sidereal.get(&body),
        }
    }

    /// Aspects with an orb of at most `max_orb`, tightest first.
    pub fn significant_aspects(&self, max_orb: f64) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| a.orb <= max_orb).collect()
    }

    /// Planets (Sun to Pluto) in tropical house `house`.
    pub fn bodies_in_house(&self, house: u8) -> Vec<Body> {
        PLANETS
            .iter()
            .copied()
            .filter(|b| self.tropical.get(b).map(|p| p.house) == Some(house))
            .collect()
    }
}

use crate::angles::{normalize_degrees, round2};
use crate::aspects::AspectCalculator;
use crate::bodies::Body;
use crate::chart::interceptions::detect_interceptions;
use crate::chart::query::{BirthQuery, QueryError};
use crate::chart::types::{Chart, ChartPosition, HouseCusp, RulerRecord};
use crate::ephemeris::{BodyPosition, Ephemeris, EphemerisError, HouseSystem};
use crate::patterns::extract_strong_points;
use crate::time::{ResolvedTime, TimeError, TimeResolver};
use crate::vedic::{nakshatra_of, sidereal_house_of, whole_sign_houses};
use crate::western::{house_of, ruling_planet_of, sign_of, Sign};
use std::collections::BTreeMap;
use thiserror::Error;
use urania_config::PatternThresholds;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

/// Points computed in the tropical frame only, when the ephemeris has them.
const AUXILIARY_POINTS: [Body; 2] = [Body::DarkMoon, Body::Chiron];

/// Builds charts from birth queries. Holds no per-request state, so one
/// engine may serve any number of independent computations.
pub struct ChartEngine<E: Ephemeris> {
    ephemeris: E,
    resolver: TimeResolver,
    house_system: HouseSystem,
    aspects: AspectCalculator,
    thresholds: PatternThresholds,
}

impl<E: Ephemeris> ChartEngine<E> {
    pub fn new(ephemeris: E, resolver: TimeResolver, house_system: HouseSystem) -> Self {
        Self {
            ephemeris,
            resolver,
            house_system,
            aspects: AspectCalculator::new(),
            thresholds: PatternThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: PatternThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn compute_chart(&self, query: &BirthQuery) -> Result<Chart, ChartError> {
        let time = self.resolver.resolve(query)?;
        self.assemble(&query.name, time)
    }

    /// Build the chart for an already resolved birth time.
    pub fn assemble(&self, name: &str, time: ResolvedTime) -> Result<Chart, ChartError> {
        let jd = self.ephemeris.julian_day(time.utc);
        let snapshot = self.ephemeris.snapshot(jd, &time.location, self.house_system)?;
        let ayanamsa = snapshot.ayanamsa;
        let cusps = snapshot.houses.cusps;
        let angles = snapshot.houses.angles;
        log::info!("Julian day {:.6}, ayanamsa {:.6}", jd, ayanamsa);

        let asc_tropical = normalize_degrees(round2(angles.asc));
        let asc_sidereal = to_sidereal(asc_tropical, ayanamsa);
        let sidereal_asc_sign = sign_of(asc_sidereal).0;
        log::info!(
            "Ascendant {:.2} {} (sidereal {:.2} {})",
            asc_tropical,
            sign_of(asc_tropical).0,
            asc_sidereal,
            sidereal_asc_sign
        );

        let mut tropical = BTreeMap::new();
        let mut sidereal = BTreeMap::new();
        tropical.insert(Body::Ascendant, place(asc_tropical, 0.0, false, 1, None));
        sidereal.insert(
            Body::Ascendant,
            place(asc_sidereal, 0.0, false, 1, Some(asc_sidereal)),
        );

        for (body, pos) in &snapshot.bodies {
            let lon = normalize_degrees(round2(pos.lon));
            tropical.insert(*body, tropical_place(lon, pos, &cusps));
            sidereal.insert(
                *body,
                sidereal_place(to_sidereal(lon, ayanamsa), pos, sidereal_asc_sign),
            );
        }

        // South node mirrors the north node in both frames.
        if let (Some(rahu_t), Some(rahu_s)) =
            (tropical.get(&Body::Rahu).cloned(), sidereal.get(&Body::Rahu).cloned())
        {
            let pos = BodyPosition::from_longitude(rahu_t.longitude, rahu_t.speed);
            let ketu_t = normalize_degrees(round2(rahu_t.longitude + 180.0));
            let ketu_s = normalize_degrees(round2(rahu_s.longitude + 180.0));
            tropical.insert(Body::Ketu, tropical_place(ketu_t, &pos, &cusps));
            sidereal.insert(Body::Ketu, sidereal_place(ketu_s, &pos, sidereal_asc_sign));
        }

        for body in AUXILIARY_POINTS {
            match self.ephemeris.body_position(body, jd) {
                Ok(pos) => {
                    let lon = normalize_degrees(round2(pos.lon));
                    tropical.insert(body, tropical_place(lon, &pos, &cusps));
                }
                Err(e) => log::warn!("{} omitted: {}", body, e),
            }
        }

        let points: Vec<(Body, f64)> = tropical
            .iter()
            .filter(|(body, _)| !AUXILIARY_POINTS.contains(*body))
            .map(|(body, p)| (*body, p.longitude))
            .collect();
        let aspects = self.aspects.detect(&points);

        let tropical_houses = cusps
            .iter()
            .enumerate()
            .map(|(i, cusp)| {
                let degree = normalize_degrees(round2(*cusp));
                let (sign, degree_in_sign) = sign_of(degree);
                HouseCusp {
                    house: (i + 1) as u8,
                    degree,
                    sign,
                    degree_in_sign,
                }
            })
            .collect();
        let sidereal_houses = whole_sign_houses(sidereal_asc_sign)
            .iter()
            .enumerate()
            .map(|(i, sign)| HouseCusp {
                house: (i + 1) as u8,
                degree: sign.start(),
                sign: *sign,
                degree_in_sign: 0.0,
            })
            .collect();

        let tropical_ruler = ruler_record(sign_of(asc_tropical).0, &tropical);
        let sidereal_ruler = ruler_record(sidereal_asc_sign, &sidereal);

        let mut chart = Chart {
            name: name.to_string(),
            time,
            julian_day: jd,
            ayanamsa,
            house_system: self.house_system,
            angles,
            tropical,
            sidereal,
            tropical_houses,
            sidereal_houses,
            aspects,
            tropical_ruler,
            sidereal_ruler,
            interceptions: detect_interceptions(&cusps),
            strong_points: Vec::new(),
        };
        chart.strong_points = extract_strong_points(&chart, &self.thresholds);
        log::debug!(
            "Chart for '{}': {} aspects, {} strong points",
            chart.name,
            chart.aspects.len(),
            chart.strong_points.len()
        );
        Ok(chart)
    }
}

fn to_sidereal(tropical: f64, ayanamsa: f64) -> f64 {
    normalize_degrees(round2(normalize_degrees(tropical - ayanamsa)))
}

fn place(
    longitude: f64,
    speed: f64,
    retrograde: bool,
    house: u8,
    nakshatra_lon: Option<f64>,
) -> ChartPosition {
    let (sign, degree) = sign_of(longitude);
    ChartPosition {
        longitude,
        sign,
        degree,
        house,
        speed,
        retrograde,
        nakshatra: nakshatra_lon.map(nakshatra_of),
    }
}

fn tropical_place(longitude: f64, pos: &BodyPosition, cusps: &[f64; 12]) -> ChartPosition {
    place(
        longitude,
        pos.speed_lon,
        pos.retrograde,
        house_of(longitude, cusps),
        None,
    )
}

fn sidereal_place(longitude: f64, pos: &BodyPosition, asc_sign: Sign) -> ChartPosition {
    let house = sidereal_house_of(sign_of(longitude).0, asc_sign);
    place(longitude, pos.speed_lon, pos.retrograde, house, Some(longitude))
}

fn ruler_record(ascendant_sign: Sign, positions: &BTreeMap<Body, ChartPosition>) -> RulerRecord {
    let ruler = ruling_planet_of(ascendant_sign);
    RulerRecord {
        ascendant_sign,
        ruler,
        position: positions.get(&ruler).cloned(),
    }
}

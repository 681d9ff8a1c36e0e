//! Table-driven ephemeris for positions that are already known, e.g. replayed
//! from storage or constructed in tests and benches.

use crate::angles::normalize_degrees;
use crate::bodies::Body;
use crate::ephemeris::adapter::EphemerisError;
use crate::ephemeris::types::{BodyPosition, ChartAngles, GeoLocation, HouseFrame, HouseSystem};
use crate::ephemeris::Ephemeris;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    ayanamsa: f64,
    bodies: BTreeMap<Body, BodyPosition>,
    cusps: [f64; 12],
    angles: ChartAngles,
}

impl FixedEphemeris {
    /// Empty table with equal houses starting at 0° Aries.
    pub fn new(ayanamsa: f64) -> Self {
        Self {
            ayanamsa,
            bodies: BTreeMap::new(),
            cusps: [0.0; 12],
            angles: ChartAngles::from_asc_mc(0.0, 270.0),
        }
        .with_equal_houses(0.0)
    }

    pub fn with_body(self, body: Body, lon: f64) -> Self {
        self.with_body_speed(body, lon, 1.0)
    }

    pub fn with_body_speed(mut self, body: Body, lon: f64, speed_lon: f64) -> Self {
        self.bodies
            .insert(body, BodyPosition::from_longitude(normalize_degrees(lon), speed_lon));
        self
    }

    /// Equal 30° houses from `asc`, MC on the tenth cusp.
    pub fn with_equal_houses(mut self, asc: f64) -> Self {
        for (i, cusp) in self.cusps.iter_mut().enumerate() {
            *cusp = normalize_degrees(asc + i as f64 * 30.0);
        }
        self.angles = ChartAngles::from_asc_mc(self.cusps[0], self.cusps[9]);
        self
    }

    pub fn with_houses(mut self, cusps: [f64; 12], mc: f64) -> Self {
        self.cusps = cusps.map(normalize_degrees);
        self.angles = ChartAngles::from_asc_mc(self.cusps[0], normalize_degrees(mc));
        self
    }
}

impl Ephemeris for FixedEphemeris {
    fn ayanamsa(&self, _jd: f64) -> f64 {
        self.ayanamsa
    }

    fn body_position(&self, body: Body, jd: f64) -> Result<BodyPosition, EphemerisError> {
        self.bodies
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                julian_day: jd,
                message: "no fixed position recorded".to_string(),
            })
    }

    fn houses(
        &self,
        _jd: f64,
        _location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError> {
        Ok(HouseFrame {
            system,
            cusps: self.cusps,
            angles: self.angles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_body_is_an_error() {
        let eph = FixedEphemeris::new(24.0).with_body(Body::Sun, 10.0);
        assert!(eph.body_position(Body::Sun, 0.0).is_ok());
        assert!(matches!(
            eph.body_position(Body::Moon, 0.0),
            Err(EphemerisError::CalculationFailed { body: Body::Moon, .. })
        ));
    }

    #[test]
    fn equal_houses_place_mc_on_tenth_cusp() {
        let eph = FixedEphemeris::new(24.0).with_equal_houses(100.0);
        let loc = GeoLocation { lat: 0.0, lon: 0.0 };
        let frame = eph.houses(0.0, &loc, HouseSystem::Equal).unwrap();
        assert_eq!(frame.cusps[0], 100.0);
        assert_eq!(frame.cusps[11], 70.0);
        assert_eq!(frame.angles.mc, 10.0);
        assert_eq!(frame.angles.desc, 280.0);
    }
}

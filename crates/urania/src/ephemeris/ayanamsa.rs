//! Lahiri (Chitrapaksha) ayanamsa.
//!
//! Defined as 23°15'00.658" at 1956-03-21 0h TT with nutation removed,
//! carried to other dates with the IAU 2006 general precession in longitude.

use crate::ephemeris::types::SiderealMode;

const J2000: f64 = 2451545.0;
const LAHIRI_EPOCH_JD: f64 = 2435553.5;
const LAHIRI_EPOCH_VALUE: f64 = 23.245524743;

/// General precession in longitude since J2000, in degrees.
fn general_precession(jd: f64) -> f64 {
    let t = (jd - J2000) / 36525.0;
    (5028.796195 * t + 1.1054348 * t * t) / 3600.0
}

pub fn lahiri_ayanamsa(jd: f64) -> f64 {
    LAHIRI_EPOCH_VALUE + general_precession(jd) - general_precession(LAHIRI_EPOCH_JD)
}

impl SiderealMode {
    pub fn ayanamsa(self, jd: f64) -> f64 {
        match self {
            SiderealMode::Lahiri => lahiri_ayanamsa(jd),
        }
    }
}

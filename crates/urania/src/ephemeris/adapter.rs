use crate::bodies::Body;
use crate::ephemeris::types::{
    BodyPosition, ChartAngles, EphemerisConfig, GeoLocation, HouseFrame, HouseSystem,
};
use crate::ephemeris::{installed, Ephemeris};
use chrono::{DateTime, Datelike, Timelike, Utc};
use swisseph::swe::{calc_ut, houses_ex, julday};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Ephemeris configuration has not been installed")]
    NotInstalled,
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

// FLG_SWIEPH | FLG_SPEED
const CALC_FLAGS: i32 = 2 | 256;
const HOUSE_FLAGS: i32 = 2;
// GREG_CAL
const GREGORIAN: u32 = 1;

/// Swiss Ephemeris adapter. Reads the installed process-wide configuration
/// and never changes it.
pub struct SwissEphemerisAdapter {
    config: &'static EphemerisConfig,
}

impl SwissEphemerisAdapter {
    pub fn new() -> Result<Self, EphemerisError> {
        let config = installed().ok_or(EphemerisError::NotInstalled)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        self.config
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn julian_day(&self, dt: DateTime<Utc>) -> f64 {
        let hour_decimal =
            dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
        julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREGORIAN)
    }

    fn ayanamsa(&self, jd: f64) -> f64 {
        self.config.sidereal_mode.ayanamsa(jd)
    }

    fn body_position(&self, body: Body, jd: f64) -> Result<BodyPosition, EphemerisError> {
        let code = body.swiss_code().ok_or_else(|| EphemerisError::CalculationFailed {
            body,
            julian_day: jd,
            message: "body has no ephemeris code".to_string(),
        })?;

        let result = calc_ut(jd, code as u32, CALC_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                julian_day: jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        let speed = out[3];
        Ok(BodyPosition {
            lon: out[0].rem_euclid(360.0),
            lat: out[1],
            speed_lon: speed,
            retrograde: speed < 0.0,
        })
    }

    fn houses(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError> {
        use swisseph::{AscMc, Cusp};
        let (c, a) = houses_ex(jd, HOUSE_FLAGS, location.lat, location.lon, system.code() as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if cusp_values.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "non-finite cusp for lat {} lon {} ({:?})",
                    location.lat, location.lon, system
                ),
            });
        }

        let mut out = [0.0; 12];
        for (slot, cusp) in out.iter_mut().zip(cusp_values) {
            *slot = cusp.rem_euclid(360.0);
        }

        Ok(HouseFrame {
            system,
            cusps: out,
            angles: ChartAngles::from_asc_mc(
                ascmc.ascendant.rem_euclid(360.0),
                ascmc.mc.rem_euclid(360.0),
            ),
        })
    }
}

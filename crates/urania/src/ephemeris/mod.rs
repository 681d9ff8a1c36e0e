//! Boundary to the astronomical library.
//!
//! The Swiss Ephemeris keeps its data path and sidereal mode in global state,
//! so the configuration is installed once per process with [`install`] and
//! read-only afterwards. Everything else goes through the [`Ephemeris`]
//! trait, which is a pure function of (Julian day, location, body/house code).

pub mod adapter;
pub mod ayanamsa;
pub mod fixed;
pub mod types;

pub use adapter::{EphemerisError, SwissEphemerisAdapter};
pub use ayanamsa::lahiri_ayanamsa;
pub use fixed::FixedEphemeris;
pub use types::{
    BodyPosition, ChartAngles, EphemerisConfig, EphemerisSnapshot, GeoLocation, HouseFrame,
    HouseSystem, SiderealMode,
};

use crate::bodies::{Body, EPHEMERIS_BODIES};
use chrono::{DateTime, Utc};
use std::sync::OnceLock;

static INSTALLED: OnceLock<EphemerisConfig> = OnceLock::new();

/// Install the process-wide configuration. The first successful call wins;
/// later calls return the configuration already in place.
pub fn install(config: EphemerisConfig) -> Result<&'static EphemerisConfig, EphemerisError> {
    if let Some(existing) = INSTALLED.get() {
        log::debug!("Ephemeris already configured at {}", existing.path.display());
        return Ok(existing);
    }
    if !config.path.exists() {
        return Err(EphemerisError::FileNotFound {
            path: config.path.display().to_string(),
            message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
        });
    }
    let installed = INSTALLED.get_or_init(|| {
        // read by the C library when it resolves its data directory
        std::env::set_var("SE_EPHE_PATH", &config.path);
        config
    });
    log::info!(
        "Ephemeris configured: path={} houses={:?} sidereal={:?}",
        installed.path.display(),
        installed.house_system,
        installed.sidereal_mode
    );
    Ok(installed)
}

pub fn installed() -> Option<&'static EphemerisConfig> {
    INSTALLED.get()
}

/// Resolve a configured house system name.
pub fn parse_house_system(name: &str) -> Result<HouseSystem, EphemerisError> {
    HouseSystem::from_name(name).ok_or_else(|| EphemerisError::InvalidHouseSystem {
        system: name.to_string(),
        valid: HouseSystem::valid_names(),
    })
}

pub trait Ephemeris {
    fn julian_day(&self, dt: DateTime<Utc>) -> f64 {
        crate::time::julian_day(dt)
    }

    /// Sidereal correction for `jd`, in degrees.
    fn ayanamsa(&self, jd: f64) -> f64;

    fn body_position(&self, body: Body, jd: f64) -> Result<BodyPosition, EphemerisError>;

    fn houses(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError>;

    /// The 11 chart bodies, the house frame and the ayanamsa in one pass.
    fn snapshot(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<EphemerisSnapshot, EphemerisError> {
        let mut bodies = Vec::with_capacity(EPHEMERIS_BODIES.len());
        for body in EPHEMERIS_BODIES {
            bodies.push((body, self.body_position(body, jd)?));
        }
        Ok(EphemerisSnapshot {
            julian_day: jd,
            ayanamsa: self.ayanamsa(jd),
            bodies,
            houses: self.houses(jd, location, system)?,
        })
    }
}

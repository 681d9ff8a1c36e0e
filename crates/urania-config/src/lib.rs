use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root settings for the chart engine, read from `configs/urania.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UraniaSettings {
    #[serde(default)]
    pub ephemeris: EphemerisSettings,
    #[serde(default)]
    pub geocoder: GeocoderSettings,
    #[serde(default)]
    pub fallback_location: FallbackLocation,
    #[serde(default)]
    pub patterns: PatternThresholds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EphemerisSettings {
    /// Directory holding the Swiss Ephemeris `.se1` files.
    #[serde(default = "default_ephemeris_path")]
    pub path: PathBuf,
    #[serde(default = "default_house_system")]
    pub house_system: String,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            path: default_ephemeris_path(),
            house_system: default_house_system(),
        }
    }
}

fn default_ephemeris_path() -> PathBuf {
    std::env::var("SWISS_EPHEMERIS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
}

fn default_house_system() -> String {
    "placidus".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderSettings {
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "urania-natal/0.1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Location used when a birth place cannot be geocoded (Paris).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FallbackLocation {
    #[serde(default = "default_fallback_lat")]
    pub lat: f64,
    #[serde(default = "default_fallback_lon")]
    pub lon: f64,
}

impl Default for FallbackLocation {
    fn default() -> Self {
        Self {
            lat: default_fallback_lat(),
            lon: default_fallback_lon(),
        }
    }
}

fn default_fallback_lat() -> f64 {
    48.8566
}

fn default_fallback_lon() -> f64 {
    2.3522
}

/// Thresholds used by the strong-point detectors. All values are degrees
/// except `cluster_min_size`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PatternThresholds {
    pub angle_orb: f64,
    pub conjunction_orb: f64,
    pub configuration_orb: f64,
    pub cazimi_orb: f64,
    pub combustion_orb: f64,
    pub luminary_major_orb: f64,
    pub luminary_minor_orb: f64,
    pub cluster_min_size: usize,
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            angle_orb: 5.0,
            conjunction_orb: 5.0,
            configuration_orb: 8.0,
            cazimi_orb: 0.17,
            combustion_orb: 8.0,
            luminary_major_orb: 4.0,
            luminary_minor_orb: 2.5,
            cluster_min_size: 3,
        }
    }
}

const CONFIG_CANDIDATES: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania settings: {e}"))
}

/// Load settings from an explicit path, or probe the usual relative paths.
///
/// An explicit path must exist and parse. Without one, the first readable
/// candidate is used and defaults apply when none is found.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
        return parse_settings(&text);
    }
    for p in &CONFIG_CANDIDATES {
        if let Ok(text) = fs::read_to_string(p) {
            return parse_settings(&text);
        }
    }
    Ok(UraniaSettings::default())
}
